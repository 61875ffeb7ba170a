use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use spoctl::http::{ApiClient, RequestDescriptor, GRAPH_ACCEPT, SPO_ACCEPT};
use spoctl::rate_limit::RateLimiter;
use spoctl::retry::RetryConfig;
use spoctl::session::Connection;

#[test]
fn test_request_descriptor_constructors() {
    let get = RequestDescriptor::get("https://contoso.sharepoint.com/_api/web".to_string());
    assert_eq!(get.method, Method::GET);
    assert_eq!(get.accept, SPO_ACCEPT);
    assert!(get.body.is_none());

    let graph =
        RequestDescriptor::graph_get("https://graph.microsoft.com/v1.0/me".to_string());
    assert_eq!(graph.accept, GRAPH_ACCEPT);

    let post = RequestDescriptor::post(
        "https://contoso.sharepoint.com/_api/web/lists".to_string(),
        json!({ "Title": "Docs" }),
    );
    assert_eq!(post.method, Method::POST);
    assert!(post.body.is_some());

    let delete = RequestDescriptor::delete(
        "https://contoso.sharepoint.com/_api/web/lists('x')".to_string(),
    );
    assert_eq!(delete.method, Method::DELETE);
}

#[tokio::test]
async fn test_client_reports_connect_failures_as_upstream_errors() {
    let client = ApiClient::new(Duration::from_millis(500)).expect("client")
        .with_retry_config(RetryConfig {
            max_retries: 1,
            initial_backoff_ms: 1,
            backoff_factor: 2.0,
            max_backoff_ms: 10,
            add_jitter: false,
        });
    let connection = Connection::new("token".to_string(), None);

    // Nothing listens on this port; the request must fail without panicking
    let descriptor = RequestDescriptor::get("http://127.0.0.1:9/_api/web".to_string());
    let result = client.execute(&connection, &descriptor).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_client_builders_compose() {
    let client = ApiClient::new(Duration::from_millis(500))
        .expect("client")
        .with_retry_config(RetryConfig::default())
        .with_rate_limiter(Arc::new(RateLimiter::new(10, 1000, 2)));

    let connection = Connection::new("token".to_string(), None);
    let descriptor = RequestDescriptor::get("http://127.0.0.1:9/_api/web".to_string());
    assert!(client.execute(&connection, &descriptor).await.is_err());
}
