//! Client configuration.

use std::time::Duration;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Every request is bounded by this timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Config for `base_url` (trailing slashes are dropped).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read `CATALOG_API_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
            tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
