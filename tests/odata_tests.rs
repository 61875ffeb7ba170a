use reqwest::StatusCode;
use serde_json::json;

use spoctl::error::CommandError;
use spoctl::odata::{error_from_response, escape_literal, extract_error_message};

#[test]
fn test_extracts_spo_odata_error() {
    let body = json!({
        "odata.error": { "message": { "lang": "en-US", "value": "File Not Found." } }
    });
    assert_eq!(
        extract_error_message(&body),
        Some("File Not Found.".to_string())
    );
}

#[test]
fn test_extracts_wrapped_odata_error() {
    let body = json!({
        "error": { "odata.error": { "message": { "value": "X" } } }
    });
    assert_eq!(extract_error_message(&body), Some("X".to_string()));
}

#[test]
fn test_extracts_verbose_odata_error() {
    let body = json!({
        "error": { "message": { "lang": "en-US", "value": "List does not exist." } }
    });
    assert_eq!(
        extract_error_message(&body),
        Some("List does not exist.".to_string())
    );
}

#[test]
fn test_extracts_graph_error() {
    let body = json!({
        "error": { "code": "Request_ResourceNotFound", "message": "Resource not found." }
    });
    assert_eq!(
        extract_error_message(&body),
        Some("Resource not found.".to_string())
    );
}

#[test]
fn test_extracts_csom_error_info_from_batch_response() {
    let body = json!([
        { "SchemaVersion": "15.0.0.0", "LibraryVersion": "16.0.0.0" },
        { "ErrorInfo": { "ErrorMessage": "Unknown Error", "ErrorCode": -1 } }
    ]);
    assert_eq!(
        extract_error_message(&body),
        Some("Unknown Error".to_string())
    );
}

#[test]
fn test_extracts_csom_error_info_from_object() {
    let body = json!({ "ErrorInfo": { "ErrorMessage": "Access denied." } });
    assert_eq!(
        extract_error_message(&body),
        Some("Access denied.".to_string())
    );
}

#[test]
fn test_no_known_envelope_yields_none() {
    assert_eq!(extract_error_message(&json!({ "unexpected": true })), None);
    assert_eq!(extract_error_message(&json!("plain text")), None);
}

#[test]
fn test_error_from_response_maps_envelope_message_exactly() {
    let body = r#"{"error":{"odata.error":{"message":{"value":"X"}}}}"#;
    let err = error_from_response(StatusCode::BAD_REQUEST, body);
    match err {
        CommandError::Upstream(message) => assert_eq!(message, "X"),
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[test]
fn test_error_from_response_falls_back_to_status() {
    let err = error_from_response(StatusCode::SERVICE_UNAVAILABLE, "<html>oops</html>");
    assert_eq!(
        err.to_string(),
        "Request failed with status code 503 Service Unavailable"
    );
}

#[test]
fn test_escape_literal_doubles_single_quotes() {
    assert_eq!(escape_literal("Team's Docs"), "Team''s Docs");
    assert_eq!(escape_literal("plain"), "plain");
}
