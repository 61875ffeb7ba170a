//! Server-relative URL expansion for command options
//!
//! Operators may pass site and folder locations either as absolute URLs or
//! as server-relative paths. Before a command executes, every URL-valued
//! option it declares is rewritten in place: values starting with `/` are
//! prefixed with the tenant's SharePoint root URL from the active
//! connection. Each command lists exactly the fields it owns; a field that
//! must stay relative is simply not listed.

use tracing::debug;

use crate::error::{CommandError, Result};
use crate::session::Connection;
use crate::url_util::get_absolute_url;

/// Canonical registry of option names recognized as URL-valued. Commands
/// declare their fields by these names; the list mirrors the options the
/// REST surface exposes across entities.
pub const URL_OPTION_NAMES: &[&str] = &[
    "app-catalog-url",
    "folder-url",
    "library-url",
    "list-url",
    "parent-url",
    "site-url",
    "target-url",
    "url",
    "web-url",
];

/// One URL-valued option of a command: its name and a mutable borrow of
/// the parsed value.
pub struct UrlField<'a> {
    name: &'static str,
    value: &'a mut String,
}

impl<'a> UrlField<'a> {
    pub fn new(name: &'static str, value: &'a mut String) -> Self {
        debug_assert!(
            URL_OPTION_NAMES.contains(&name),
            "unregistered URL option name: {}",
            name
        );
        Self { name, value }
    }
}

/// Rewrites every server-relative field to an absolute URL using the
/// connection's SharePoint root. Absolute values pass through untouched.
///
/// Fails with a configuration error when a server-relative value is
/// present but no root URL is known; the message tells the operator how to
/// fix either side.
pub fn expand_url_fields(connection: &Connection, fields: Vec<UrlField<'_>>) -> Result<()> {
    for field in fields {
        if !field.value.starts_with('/') {
            continue;
        }
        let root = connection.spo_url.as_deref().ok_or_else(|| {
            CommandError::Configuration(format!(
                "Option '--{}' is a server-relative URL but the SharePoint root URL of the \
                 tenant is not known. Run 'spoctl login --spo-url <url>' or use an absolute URL.",
                field.name
            ))
        })?;
        let absolute = get_absolute_url(root, field.value);
        debug!("Expanded --{} to {}", field.name, absolute);
        *field.value = absolute;
    }
    Ok(())
}
