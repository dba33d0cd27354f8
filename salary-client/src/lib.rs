//! Typed async client for the remote tax-computation service.
//!
//! The service owns all tax law and option catalogs; this crate only speaks
//! its HTTP contract:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/get_options` | Countries and tax years |
//! | GET    | `/api/get_states/{country}` | States for a country |
//! | GET    | `/api/get_cities/{country}/{state}` | Cities for a state |
//! | POST   | `/api/calculate` | Compute a tax result |
//!
//! Country and state names can contain spaces ("United States", "New York"),
//! so path segments are always percent-encoded.

pub mod config;
pub mod error;
pub mod types;

pub use config::ClientConfig;
pub use error::ApiError;
pub use types::{CalculationRequest, OptionCatalog};

use std::time::Duration;

use salary_core::TaxResult;
use tracing::debug;

use crate::types::{CityList, StateList};

/// Client for the estimator service. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct EstimatorClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl EstimatorClient {
    /// Builds a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// `GET /api/get_options` — the country and tax-year catalogs.
    pub async fn get_options(&self) -> Result<OptionCatalog, ApiError> {
        let endpoint = "GET /api/get_options";
        let url = self.api_url(&["get_options"])?;
        self.get_json(endpoint, url).await
    }

    /// `GET /api/get_states/{country}` — states for a country, in service
    /// order (no re-sorting).
    pub async fn get_states(&self, country: &str) -> Result<Vec<String>, ApiError> {
        let endpoint = format!("GET /api/get_states/{country}");
        let url = self.api_url(&["get_states", country])?;
        let list: StateList = self.get_json(&endpoint, url).await?;
        Ok(list.states)
    }

    /// `GET /api/get_cities/{country}/{state}` — cities for a state, in
    /// service order.
    pub async fn get_cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError> {
        let endpoint = format!("GET /api/get_cities/{country}/{state}");
        let url = self.api_url(&["get_cities", country, state])?;
        let list: CityList = self.get_json(&endpoint, url).await?;
        Ok(list.cities)
    }

    /// `POST /api/calculate` — submits the flattened form record and returns
    /// the computed result. Any non-success status maps to
    /// [`ApiError::Api`], which callers surface as a computation failure.
    pub async fn calculate(&self, request: &CalculationRequest) -> Result<TaxResult, ApiError> {
        let endpoint = "POST /api/calculate";
        let url = self.api_url(&["calculate"])?;
        debug!(is_resident = request.is_resident, "submitting calculation");

        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let resp = Self::error_for_status(endpoint, resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Joins `/api/{segments...}` onto the base URL, percent-encoding each
    /// segment.
    fn api_url(&self, segments: &[&str]) -> Result<url::Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        url: url::Url,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let resp = Self::error_for_status(endpoint, resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    async fn error_for_status(
        endpoint: &str,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
        Err(ApiError::Api {
            endpoint: endpoint.into(),
            status,
            body,
        })
    }
}
