//! Wire types for the estimator service endpoints.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Form field carrying the residency selector value. Stripped from the
/// outgoing record and replaced by the boolean `is_resident`.
pub const RESIDENCY_FIELD: &str = "residency-status";

/// Selector value that maps to `is_resident = true`.
pub const RESIDENT_VALUE: &str = "resident";

/// Response of `GET /api/get_options`. Fetched once per session; the lists
/// are immutable after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCatalog {
    pub countries: Vec<String>,
    #[serde(rename = "taxYears")]
    pub tax_years: Vec<String>,
}

/// Response of `GET /api/get_states/{country}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct StateList {
    pub states: Vec<String>,
}

/// Response of `GET /api/get_cities/{country}/{state}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct CityList {
    pub cities: Vec<String>,
}

/// Body of `POST /api/calculate`: every form field flattened to a
/// string-keyed record, plus the derived residency boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationRequest {
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,
    pub is_resident: bool,
}

impl CalculationRequest {
    /// Builds the request from raw form fields.
    ///
    /// The `residency-status` field is removed and replaced by
    /// `is_resident`, true only when its value is exactly `"resident"`.
    /// All other fields pass through untouched, in form order.
    pub fn from_form(mut form: IndexMap<String, String>) -> Self {
        let is_resident = form
            .shift_remove(RESIDENCY_FIELD)
            .is_some_and(|value| value == RESIDENT_VALUE);
        Self {
            fields: form,
            is_resident,
        }
    }
}
