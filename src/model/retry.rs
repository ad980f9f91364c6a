/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Retry policy for timed-out requests
//!
//! Only [`AppError::Timeout`] is retried. Every other kind propagates
//! immediately: re-issuing a mutating call (e.g. batch creation) under an
//! ambiguous failure could duplicate side effects on the backend.

use crate::constants::{
    DEFAULT_MAX_RETRY_ATTEMPTS, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_ELAPSED_SECS,
};
use crate::error::AppError;
use crate::utils::config::get_env_or_none;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Configuration for the exponential backoff applied to timed-out requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first (None = use default 5)
    pub max_attempt_count: Option<u32>,
    /// Base delay in milliseconds, doubled on each attempt (None = use default 500)
    pub base_delay_ms: Option<u64>,
    /// Cap in seconds on the total time spent retrying (None = use default 120)
    pub max_elapsed_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration from environment variables, falling back
    /// to the crate defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration with a maximum number of attempts
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            base_delay_ms: None,
            max_elapsed_secs: None,
        }
    }

    /// Creates a retry configuration with a custom base delay
    #[must_use]
    pub fn with_base_delay(base_delay_ms: u64) -> Self {
        Self {
            max_attempt_count: None,
            base_delay_ms: Some(base_delay_ms),
            max_elapsed_secs: None,
        }
    }

    /// Creates a retry configuration with both max attempts and base delay
    #[must_use]
    pub fn with_max_attempts_and_delay(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            base_delay_ms: Some(base_delay_ms),
            max_elapsed_secs: None,
        }
    }

    /// Gets the maximum attempt count (default: 5)
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempt_count.unwrap_or(DEFAULT_MAX_RETRY_ATTEMPTS)
    }

    /// Gets the base delay between attempts (default: 500ms)
    #[must_use]
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms.unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS))
    }

    /// Gets the cap on total elapsed retry time (default: 120s)
    #[must_use]
    pub fn max_elapsed(&self) -> Duration {
        Duration::from_secs(self.max_elapsed_secs.unwrap_or(DEFAULT_RETRY_MAX_ELAPSED_SECS))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_attempt_count: Option<u32> = get_env_or_none("MAX_RETRY_ATTEMPTS");
        let base_delay_ms: Option<u64> = get_env_or_none("RETRY_BASE_DELAY_MS");
        let max_elapsed_secs: Option<u64> = get_env_or_none("RETRY_MAX_ELAPSED_SECS");

        Self {
            max_attempt_count,
            base_delay_ms,
            max_elapsed_secs,
        }
    }
}

/// Runs `operation`, retrying with exponential backoff as long as it fails
/// with [`AppError::Timeout`]
///
/// Non-timeout errors propagate on the spot. The loop is bounded both by
/// `max_attempts` and by the elapsed-time cap, whichever trips first.
///
/// # Arguments
/// * `config` - Retry configuration (attempts, base delay, elapsed cap)
/// * `operation` - Factory producing a fresh future per attempt
///
/// # Returns
/// * `Ok(T)` - Result of the first successful attempt
/// * `Err(AppError)` - The terminal error, `Timeout` if the budget ran out
///
/// # Example
/// ```ignore
/// use gencove_client::model::retry::{RetryConfig, retry_on_timeout};
///
/// let config = RetryConfig::with_max_attempts(3);
/// let project = retry_on_timeout(&config, || service.get_project(&id)).await?;
/// ```
pub async fn retry_on_timeout<T, F, Fut>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let started = Instant::now();
    let max_attempts = config.max_attempts();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => return Ok(value),
            Err(AppError::Timeout) => {
                if attempt >= max_attempts {
                    error!(
                        "request timed out after {} attempts, max attempts ({}) reached",
                        attempt, max_attempts
                    );
                    return Err(AppError::Timeout);
                }

                let delay = backoff_delay(config.base_delay(), attempt);
                if started.elapsed() + delay >= config.max_elapsed() {
                    error!(
                        "retry budget of {:?} exhausted after {} attempts",
                        config.max_elapsed(),
                        attempt
                    );
                    return Err(AppError::Timeout);
                }

                warn!(
                    "request timed out (attempt {}), retrying in {:?}",
                    attempt, delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Exponential delay for the given attempt number (1-based), with up to 25%
/// random jitter added on top
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    // Cap the shift so the multiplier cannot overflow
    let exponent = (attempt - 1).min(16);
    let delay = base.saturating_mul(1u32 << exponent);

    let jitter_budget = delay.as_millis() as u64 / 4;
    if jitter_budget == 0 {
        return delay;
    }
    let jitter = rand::rng().random_range(0..=jitter_budget);
    delay + Duration::from_millis(jitter)
}
