//! Retry operations with exponential backoff
//!
//! Transient failures from the Microsoft REST endpoints (throttling, 5xx,
//! connection resets) are retried below the command pipeline with
//! exponentially increasing delays and optional jitter. Whether a given
//! error is retriable is decided by the caller through a predicate.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Configuration for the exponential backoff retry strategy.
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_retries: u32,

    /// Initial wait time in milliseconds
    pub initial_backoff_ms: u64,

    /// Multiplier for each subsequent retry
    pub backoff_factor: f64,

    /// Maximum backoff time in milliseconds
    pub max_backoff_ms: u64,

    /// Whether to add jitter to backoff times
    pub add_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 100,
            backoff_factor: 2.0,
            max_backoff_ms: 10000,
            add_jitter: true,
        }
    }
}

/// Executes an async operation, retrying with exponential backoff while
/// `is_retriable` approves the error and attempts remain. The last error is
/// returned unchanged when retries are exhausted.
///
/// # Examples
///
/// ```
/// use spoctl::retry::{with_exponential_backoff, RetryConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = RetryConfig::default();
/// let value = with_exponential_backoff(
///     || async { Ok::<_, anyhow::Error>(42) },
///     |_err| true,
///     &config,
/// )
/// .await?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// ```
pub async fn with_exponential_backoff<F, Fut, T, E, R>(
    operation: F,
    is_retriable: R,
    config: &RetryConfig,
) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
{
    let mut attempt = 0;
    let mut backoff_ms = config.initial_backoff_ms;

    loop {
        let result = operation().await;

        match &result {
            Ok(_) => return result,
            Err(err) => {
                attempt += 1;

                if attempt >= config.max_retries || !is_retriable(err) {
                    return result;
                }

                let jitter_ms = if config.add_jitter {
                    let jitter_factor = rand::random::<f64>() * 0.2 + 0.9; // 0.9-1.1 range
                    (backoff_ms as f64 * jitter_factor) as u64
                } else {
                    backoff_ms
                };

                let delay = std::cmp::min(jitter_ms, config.max_backoff_ms);

                debug!(
                    "Retry attempt {}/{} after {}ms delay",
                    attempt, config.max_retries, delay
                );

                sleep(Duration::from_millis(delay)).await;

                backoff_ms = (backoff_ms as f64 * config.backoff_factor) as u64;
                if backoff_ms > config.max_backoff_ms {
                    backoff_ms = config.max_backoff_ms;
                }
            }
        }
    }
}
