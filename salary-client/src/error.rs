//! Error taxonomy for the estimator service client.

use thiserror::Error;

/// Failure talking to the tax-computation service.
///
/// The split matters to callers: a non-success HTTP status from
/// `/api/calculate` is surfaced to the user as a computation failure, while
/// transport and decode failures are surfaced as a generic error. Option
/// fetches treat every variant the same way (logged, section hidden).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself failed (connection refused, timeout, DNS, ...).
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body could not be decoded as the expected shape.
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL cannot take path segments.
    #[error("base URL '{0}' cannot be a base for API paths")]
    BaseUrl(String),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl ApiError {
    /// True when the service itself rejected the request (non-success status),
    /// as opposed to the request never completing or the body being garbage.
    pub fn is_status_error(&self) -> bool {
        matches!(self, ApiError::Api { .. })
    }
}
