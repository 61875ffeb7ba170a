//! Option validation shared by all commands
//!
//! Validators run before any network call; a failure here means the command
//! never executes. Messages name the offending option so the operator can
//! correct the invocation without digging through help text.

use regex::Regex;
use uuid::Uuid;

use crate::error::{CommandError, Result};

/// Checks that `value` parses as a GUID.
pub fn is_valid_guid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// Checks that `url` is an absolute `https` SharePoint site URL.
pub fn is_valid_sharepoint_url(url: &str) -> bool {
    if !url.starts_with("https://") {
        return false;
    }
    let host = &url["https://".len()..];
    let host = host.split('/').next().unwrap_or("");
    !host.is_empty() && !host.contains(' ')
}

/// Checks that `value` is a SharePoint content type id, e.g. `0x0101009748…`.
pub fn is_valid_content_type_id(value: &str) -> bool {
    Regex::new(r"^0x[0-9A-Fa-f]+$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Validates a GUID-valued option.
pub fn validate_guid(option: &str, value: &str) -> Result<()> {
    if is_valid_guid(value) {
        Ok(())
    } else {
        Err(CommandError::Validation(format!(
            "'{}' supplied in option '--{}' is not a valid GUID.",
            value, option
        )))
    }
}

/// Validates a SharePoint site URL option. Server-relative values (leading
/// `/`) are accepted here; they are expanded to absolute before execution.
pub fn validate_sharepoint_url(option: &str, value: &str) -> Result<()> {
    if value.starts_with('/') || is_valid_sharepoint_url(value) {
        Ok(())
    } else {
        Err(CommandError::Validation(format!(
            "'{}' supplied in option '--{}' is not a valid SharePoint URL.",
            value, option
        )))
    }
}

/// Validates a content type id option.
pub fn validate_content_type_id(option: &str, value: &str) -> Result<()> {
    if is_valid_content_type_id(value) {
        Ok(())
    } else {
        Err(CommandError::Validation(format!(
            "'{}' supplied in option '--{}' is not a valid content type id.",
            value, option
        )))
    }
}

/// Enforces that exactly one of a set of mutually exclusive identifier
/// options was supplied. `options` pairs each option name with whether the
/// operator provided it.
pub fn require_exactly_one(options: &[(&str, bool)]) -> Result<()> {
    let supplied: Vec<&str> = options
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();
    let names: Vec<String> = options
        .iter()
        .map(|(name, _)| format!("--{}", name))
        .collect();

    match supplied.len() {
        1 => Ok(()),
        0 => Err(CommandError::Validation(format!(
            "Specify one of the following options: {}.",
            names.join(", ")
        ))),
        _ => Err(CommandError::Validation(format!(
            "Specify either {}, but not multiple.",
            names.join(" or ")
        ))),
    }
}
