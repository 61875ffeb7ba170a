//! HTTP client for the SharePoint and Microsoft Graph REST endpoints
//!
//! Commands never talk to `reqwest` directly; they describe each call with a
//! [`RequestDescriptor`] and hand it to [`ApiClient::execute`]. The client
//! owns the transport concerns the pipeline is not allowed to care about:
//! - connection pooling with TCP keepalive
//! - bearer token and `client-request-id` headers
//! - retries with exponential backoff on 429/5xx/connect/timeout
//! - rate limiting within the Microsoft service limits
//! - translation of OData/CSOM error envelopes into [`CommandError`]

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CommandError, Result};
use crate::odata;
use crate::rate_limit::{microsoft_service_limiter, RateLimiter};
use crate::retry::{with_exponential_backoff, RetryConfig};
use crate::sanitize::clean_upstream_message;
use crate::session::Connection;

/// `accept` header for SharePoint REST calls; nometadata keeps the
/// payloads free of OData decoration.
pub const SPO_ACCEPT: &str = "application/json;odata=nometadata";

/// `accept` header for Microsoft Graph calls.
pub const GRAPH_ACCEPT: &str = "application/json";

/// One REST call, fully described: target absolute URL, HTTP method,
/// `accept` header and optional JSON body. Built fresh per call, never
/// reused.
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub accept: &'static str,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// GET against a SharePoint REST endpoint.
    pub fn get(url: String) -> Self {
        Self {
            url,
            method: Method::GET,
            accept: SPO_ACCEPT,
            body: None,
        }
    }

    /// GET against a Microsoft Graph endpoint.
    pub fn graph_get(url: String) -> Self {
        Self {
            url,
            method: Method::GET,
            accept: GRAPH_ACCEPT,
            body: None,
        }
    }

    /// POST with a JSON body against a SharePoint REST endpoint.
    pub fn post(url: String, body: Value) -> Self {
        Self {
            url,
            method: Method::POST,
            accept: SPO_ACCEPT,
            body: Some(body),
        }
    }

    /// DELETE against a SharePoint REST endpoint.
    pub fn delete(url: String) -> Self {
        Self {
            url,
            method: Method::DELETE,
            accept: SPO_ACCEPT,
            body: None,
        }
    }
}

// Error classification carried through the retry loop: whether another
// attempt may help, and the user-facing error if it does not.
struct SendError {
    retriable: bool,
    error: CommandError,
}

/// HTTP client shared by all commands of one invocation.
///
/// # Examples
///
/// ```no_run
/// use spoctl::http::{ApiClient, RequestDescriptor};
/// use spoctl::session::Connection;
/// use std::time::Duration;
///
/// # async fn example() -> spoctl::error::Result<()> {
/// let client = ApiClient::new(Duration::from_secs(5))?;
/// let connection = Connection::restore()?;
/// let descriptor =
///     RequestDescriptor::get("https://contoso.sharepoint.com/_api/web".to_string());
/// let web = client.execute(&connection, &descriptor).await?;
/// println!("{}", web["Title"]);
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    client: Client,
    retry_config: RetryConfig,
    rate_limiter: Arc<RateLimiter>,
}

impl ApiClient {
    /// Creates a client with pooled connections and the default retry and
    /// rate limit settings.
    ///
    /// # Arguments
    /// * `timeout` - Request timeout duration
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent("spoctl")
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| {
                CommandError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            retry_config: RetryConfig::default(),
            rate_limiter: Arc::new(microsoft_service_limiter()),
        })
    }

    /// Sets a custom retry configuration.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Sets a custom rate limiter.
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.rate_limiter = limiter;
        self
    }

    /// Executes one described request and returns the parsed JSON body.
    ///
    /// `204 No Content` and empty bodies come back as `Value::Null`;
    /// non-JSON bodies come back as `Value::String`. Failures are mapped
    /// through the OData/CSOM envelope rules into
    /// [`CommandError::Upstream`].
    pub async fn execute(
        &self,
        connection: &Connection,
        descriptor: &RequestDescriptor,
    ) -> Result<Value> {
        debug!("{} {}", descriptor.method, descriptor.url);

        let _permit = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| CommandError::Upstream(e.to_string()))?;

        let response = with_exponential_backoff(
            || self.send_once(connection, descriptor),
            |err: &SendError| err.retriable,
            &self.retry_config,
        )
        .await
        .map_err(|send_error| send_error.error)?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let text = response
            .text()
            .await
            .map_err(|e| CommandError::Upstream(clean_upstream_message(&e.to_string())))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        }
    }

    async fn send_once(
        &self,
        connection: &Connection,
        descriptor: &RequestDescriptor,
    ) -> std::result::Result<reqwest::Response, SendError> {
        let mut request = self
            .client
            .request(descriptor.method.clone(), &descriptor.url)
            .header(ACCEPT, descriptor.accept)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", connection.access_token),
            )
            .header("client-request-id", Uuid::new_v4().to_string());

        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| SendError {
            retriable: e.is_timeout() || e.is_connect(),
            error: CommandError::Upstream(clean_upstream_message(&e.to_string())),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retriable = status.as_u16() == 429 || status.is_server_error();
        if status.as_u16() == 429 {
            warn!("Rate limit exceeded, will retry: {}", status);
        } else if status.is_server_error() {
            warn!("Server error, will retry: {}", status);
        } else {
            info!("Non-retriable client error: {}", status);
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(SendError {
            retriable,
            error: odata::error_from_response(status, &body_text),
        })
    }
}
