use crate::domain::ports::Transport;
use crate::utils::error::FetchError;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ATTEMPTS: usize = 2;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: usize,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// GET with a bounded number of attempts and a fixed pause between them.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Returns the first successful body, or the last attempt's error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let attempts = self.policy.attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.transport.get(url).await {
                Ok(body) => {
                    tracing::debug!(url, attempt, bytes = body.len(), "fetched");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(url, attempt, attempts, error = %e, "fetch attempt failed");
                    last_error = Some(e);
                }
            }

            if attempt < attempts && !self.policy.backoff.is_zero() {
                tokio::time::sleep(self.policy.backoff).await;
            }
        }

        Err(last_error.unwrap_or_else(|| FetchError::Transport {
            url: url.to_string(),
            message: "no attempts made".to_string(),
        }))
    }
}
