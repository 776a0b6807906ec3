use std::{future::Future, time::Duration};

use crate::server::{
    error::{retry::ErrorRetryStrategy, Error},
    model::pulse::MonitorSettings,
};

/// Bounded retry with exponential backoff for calls to external services
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Max attempts before failure, at least 1
    max_attempts: u32,
    /// Backoff after the first failed attempt, doubled after every following one
    initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    pub fn from_settings(settings: &MonitorSettings) -> Self {
        Self::new(
            settings.analysis_max_attempts,
            settings.analysis_initial_backoff,
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Backoff to wait after the given number of failed attempts
    pub fn backoff(&self, failed_attempts: u32) -> Duration {
        self.initial_backoff * 2_u32.pow(failed_attempts.saturating_sub(1))
    }

    /// Execute an operation with automatic retry logic
    ///
    /// Errors classified as [`ErrorRetryStrategy::Retry`] are retried until `max_attempts` is
    /// reached, any other error is returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "capture discovery")
    /// - `operation`: Produces a fresh future for every attempt
    pub async fn execute<R, F, Fut>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::debug!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff(attempt_count);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&MonitorSettings::default())
    }
}
