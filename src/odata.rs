//! OData and CSOM error envelope handling
//!
//! SharePoint REST, Microsoft Graph and the legacy CSOM endpoint each wrap
//! failures in a different JSON envelope. This module extracts the
//! human-readable message using a fixed priority of known shapes and turns
//! the result into a [`CommandError::Upstream`]; upstream errors are never
//! swallowed, only translated.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::CommandError;
use crate::sanitize::clean_upstream_message;

/// Extracts the human-readable message from a failure body, trying the
/// known envelope shapes in priority order:
///
/// 1. `{"odata.error": {"message": {"value": …}}}`
/// 2. `{"error": {"odata.error": {"message": {"value": …}}}}`
/// 3. `{"error": {"message": {"value": …}}}`
/// 4. `{"error": {"message": "…"}}` (Microsoft Graph)
/// 5. `{"ErrorInfo": {"ErrorMessage": "…"}}`, possibly nested in a CSOM
///    batch response array
pub fn extract_error_message(body: &Value) -> Option<String> {
    const POINTERS: [&str; 3] = [
        "/odata.error/message/value",
        "/error/odata.error/message/value",
        "/error/message/value",
    ];
    for pointer in POINTERS {
        if let Some(message) = body.pointer(pointer).and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }
    if let Some(message) = body.pointer("/error/message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    csom_error_message(body)
}

/// Maps a non-success HTTP response to the user-facing error. When the body
/// carries no recognizable envelope, the status line stands in for the
/// message.
pub fn error_from_response(status: StatusCode, body: &str) -> CommandError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| extract_error_message(&value))
        .unwrap_or_else(|| format!("Request failed with status code {}", status));
    CommandError::Upstream(clean_upstream_message(&message))
}

/// Escapes a string literal for use inside an OData `$filter` expression.
/// Single quotes are doubled per the OData ABNF.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

// CSOM batch responses are arrays where one element carries the ErrorInfo
// object; plain CSOM errors carry it at the top level.
fn csom_error_message(body: &Value) -> Option<String> {
    match body {
        Value::Array(items) => items.iter().find_map(csom_error_message),
        Value::Object(_) => body
            .pointer("/ErrorInfo/ErrorMessage")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
