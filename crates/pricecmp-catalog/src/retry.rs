//! Exponential backoff for transient fetch failures.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Rate limiting (429) and network failures are worth another attempt;
/// everything else would fail the same way again.
fn is_retriable(err: &CatalogError) -> bool {
    matches!(
        err,
        CatalogError::RateLimited { .. } | CatalogError::Http(_)
    )
}

/// Upper bound on a server-requested `Retry-After` wait.
const MAX_RETRY_AFTER_SECS: u64 = 60;

/// Seconds to wait after `err` on zero-based `attempt`.
///
/// A 429 with `Retry-After` waits that long (capped at
/// [`MAX_RETRY_AFTER_SECS`]); anything else waits
/// `backoff_base_secs * 2^attempt`.
fn retry_delay_secs(err: &CatalogError, attempt: u32, backoff_base_secs: u64) -> u64 {
    match err {
        CatalogError::RateLimited {
            retry_after_secs: Some(secs),
            ..
        } => (*secs).min(MAX_RETRY_AFTER_SECS),
        _ => backoff_base_secs.saturating_mul(1u64 << attempt.min(62)),
    }
}

/// Runs `operation`, retrying retriable errors up to `max_retries` more times.
///
/// The wait before each retry comes from [`retry_delay_secs`]. With `max_retries = 3` the operation runs at most 4 times. The
/// last error is returned once retries run out.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if !is_retriable(&err) || attempt >= max_retries => return Err(err),
            Err(err) => err,
        };

        let delay_secs = retry_delay_secs(&err, attempt, backoff_base_secs);
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
