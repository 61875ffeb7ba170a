use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, Semaphore};
use tokio::time::sleep;
use tracing::debug;

/// A token bucket rate limiter for controlling request rates
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum number of requests allowed in a time period
    capacity: usize,
    /// Current token count
    tokens: Mutex<usize>,
    /// Time period for token replenishment in milliseconds
    refill_time_ms: u64,
    /// Last time tokens were refilled
    last_refill: Mutex<Instant>,
    /// Semaphore to limit concurrent requests
    concurrency_limit: Arc<Semaphore>,
}

impl RateLimiter {
    /// Creates a new rate limiter
    ///
    /// # Arguments
    ///
    /// * `requests_per_period` - Maximum number of requests allowed in the given time period
    /// * `period_ms` - Time period in milliseconds for the rate limit
    /// * `max_concurrent` - Maximum number of concurrent requests allowed
    pub fn new(requests_per_period: usize, period_ms: u64, max_concurrent: usize) -> Self {
        let now = Instant::now();

        Self {
            capacity: requests_per_period,
            tokens: Mutex::new(requests_per_period),
            refill_time_ms: period_ms,
            last_refill: Mutex::new(now),
            concurrency_limit: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Acquires permission to make a request, waiting if necessary
    ///
    /// Waits until a token is available in the bucket, then acquires a
    /// permit from the semaphore to limit concurrency.
    ///
    /// Returns a guard that releases the concurrency permit when dropped.
    pub async fn acquire(&self) -> Result<RateLimitGuard> {
        loop {
            let wait_time = self.try_acquire().await;

            if wait_time == Duration::ZERO {
                break;
            }

            debug!("Rate limit reached, waiting for {:?}", wait_time);
            sleep(wait_time).await;
        }

        let permit = self
            .concurrency_limit
            .clone()
            .acquire_owned()
            .await
            .context("Failed to acquire concurrency permit")?;

        Ok(RateLimitGuard { _permit: permit })
    }

    /// Tries to acquire a token from the bucket. If no tokens are available,
    /// returns the duration to wait before retrying.
    async fn try_acquire(&self) -> Duration {
        let mut tokens = self.tokens.lock().await;
        let mut last_refill = self.last_refill.lock().await;
        let now = Instant::now();

        let elapsed = now.duration_since(*last_refill).as_millis() as u64;

        if elapsed >= self.refill_time_ms {
            let periods = elapsed / self.refill_time_ms;
            let new_tokens = periods as usize * self.capacity;

            *tokens = (*tokens + new_tokens).min(self.capacity);
            *last_refill = now - Duration::from_millis(elapsed % self.refill_time_ms);
        }

        if *tokens > 0 {
            *tokens -= 1;
            Duration::ZERO
        } else {
            let time_since_last_refill = now.duration_since(*last_refill).as_millis() as u64;
            let time_until_next_token = self.refill_time_ms.saturating_sub(time_since_last_refill);
            Duration::from_millis(time_until_next_token)
        }
    }
}

/// A guard that releases the concurrency permit when dropped
#[derive(Debug)]
pub struct RateLimitGuard {
    _permit: tokio::sync::OwnedSemaphorePermit,
}

/// Rate limiter tuned for the Microsoft 365 service limits
///
/// SharePoint Online and Graph both throttle aggressively; 60 requests per
/// minute with a handful of concurrent connections stays well inside the
/// published guidance for unattended clients.
pub fn microsoft_service_limiter() -> RateLimiter {
    RateLimiter::new(60, 60_000, 4)
}
