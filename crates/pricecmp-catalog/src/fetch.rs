use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::CatalogError;
use crate::retry::retry_with_backoff;

/// HTTP client for brochure JSON endpoints.
///
/// 404 and other non-2xx statuses come back as typed errors. Rate limiting
/// (429) and network failures are retried: a 429 waits for its `Retry-After`
/// seconds when given, everything else backs off exponentially.
pub struct BrochureClient {
    client: Client,
    max_retries: u32,
    /// Base delay for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl BrochureClient {
    /// Creates a client with a request timeout, `User-Agent` and retry policy.
    ///
    /// `max_retries` counts attempts after the first; `0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches `url` and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::RateLimited`]: HTTP 429 after all retries.
    /// - [`CatalogError::NotFound`]: HTTP 404 (not retried).
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx (not retried).
    /// - [`CatalogError::Http`]: network failure after all retries.
    /// - [`CatalogError::Deserialize`]: body is not JSON (not retried).
    pub async fn fetch_json(&self, url: &str) -> Result<Value, CatalogError> {
        let value = retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok());
                return Err(CatalogError::RateLimited {
                    url: url.to_owned(),
                    retry_after_secs,
                });
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(CatalogError::NotFound {
                    url: url.to_owned(),
                });
            }

            if !status.is_success() {
                return Err(CatalogError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            let body = response.text().await?;
            serde_json::from_str::<Value>(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("brochure from {url}"),
                source: e,
            })
        })
        .await?;

        tracing::info!(url, "fetched brochure");
        Ok(value)
    }
}
