use std::time::Duration;

use crate::domain::DomainError;
use crate::infrastructure::config::HttpConfig;

/// One pooled client shared by every provider adapter.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| DomainError::internal(format!("Failed to create HTTP client: {e}")))
}

/// Transport failures carry the request URL, and ours embed API keys.
pub(crate) fn transport_error(api: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        return DomainError::timeout(format!("{api} request timed out"));
    }
    DomainError::external(format!("{api} request failed: {}", e.without_url()))
}
