use std::time::Duration;

use jobreach_core::RemoteError;
use thiserror::Error;
use tokio::time::sleep;
use tracing::warn;

/// How often and how patiently to re-attempt a transient remote failure.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_retries: u32,
    /// Fixed pause between consecutive attempts. Deliberately not
    /// exponential; the remote rate limits are short-lived.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

/// A remote call that kept failing transiently until the policy gave up.
#[derive(Debug, Error)]
#[error("remote call failed after {attempts} attempts: {source}")]
pub struct RemoteServiceError {
    pub attempts: u32,
    #[source]
    pub source: RemoteError,
}

/// Run a remote operation with fixed-delay retries.
///
/// Only [`RemoteError::Transient`] consumes an attempt; a permanent error
/// propagates immediately, wrapped with the attempt count so far. The sleep
/// happens between attempts, never after the last one.
///
/// This layer adds no idempotency: re-attempting a non-idempotent remote
/// create may leave duplicate resources behind, which is why every
/// re-attempt is logged.
pub async fn retry_fixed<F, Fut, T>(
    mut operation: F,
    policy: &RetryPolicy,
) -> Result<T, RemoteServiceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let max = policy.max_retries.max(1);
    let mut last_error = None;

    for attempt in 1..=max {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < max => {
                warn!(
                    "remote call failed (attempt {attempt}/{max}): {e}; retrying in {:?}",
                    policy.retry_delay
                );
                sleep(policy.retry_delay).await;
                last_error = Some(e);
            }
            Err(e) => {
                return Err(RemoteServiceError {
                    attempts: attempt,
                    source: e,
                });
            }
        }
    }

    // Unreachable: the loop always returns on its final iteration.
    Err(RemoteServiceError {
        attempts: max,
        source: last_error
            .unwrap_or_else(|| RemoteError::Permanent(anyhow::anyhow!("no attempts made"))),
    })
}
