//! Estimator service client configuration.

use thiserror::Error;
use url::Url;

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid service URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid timeout '{0}': expected whole seconds")]
    InvalidTimeout(String),
}

/// Connection settings for the tax-computation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service hosting `/api/*`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `SALARY_API_URL` (default: `http://127.0.0.1:5000`)
    /// - `SALARY_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var("SALARY_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        let base_url = raw_url.parse().map_err(|source| ConfigError::InvalidUrl {
            url: raw_url,
            source,
        })?;

        let timeout_secs = match std::env::var("SALARY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            Err(_) => 30,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}
