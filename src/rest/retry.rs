//! Caller-driven retry of transient failures.
//!
//! The client never repeats a call on its own. Callers who want retries wrap
//! the call here and pick the policy, typically
//! [`ExponentialBackoff`](reqwest_retry::policies::ExponentialBackoff).
//!
//! ```rust,no_run
//! use bitstamp_api_client::rest::{BitstampRestClient, retry_transient};
//! use reqwest_retry::policies::ExponentialBackoff;
//!
//! # async fn run() -> Result<(), bitstamp_api_client::BitstampError> {
//! let client = BitstampRestClient::new()?;
//! let policy = ExponentialBackoff::builder().build_with_max_retries(3);
//! let ticker = retry_transient(&policy, || client.get_ticker()).await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::SystemTime;

use reqwest_retry::{RetryDecision, RetryPolicy};

use crate::error::BitstampError;

/// Run `operation` until it succeeds, fails fatally, or `policy` gives up.
///
/// Only [`BitstampError::Transient`] failures are retried. The last error is
/// returned once the policy stops.
pub async fn retry_transient<T, P, F, Fut>(policy: &P, mut operation: F) -> Result<T, BitstampError>
where
    P: RetryPolicy,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BitstampError>>,
{
    let started = SystemTime::now();
    let mut n_past_retries = 0;

    loop {
        match operation().await {
            Err(err) if err.is_transient() => match policy.should_retry(started, n_past_retries) {
                RetryDecision::Retry { execute_after } => {
                    let wait = execute_after
                        .duration_since(SystemTime::now())
                        .unwrap_or_default();
                    n_past_retries += 1;
                    tracing::debug!(
                        attempt = n_past_retries,
                        wait_ms = wait.as_millis() as u64,
                        "Retrying after transient failure: {}",
                        err
                    );
                    tokio::time::sleep(wait).await;
                }
                RetryDecision::DoNotRetry => return Err(err),
            },
            other => return other,
        }
    }
}
