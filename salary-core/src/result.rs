//! The flat tax-result record returned by the computation service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::country::Country;

/// A computed tax result, as received from `POST /api/calculate`.
///
/// The shape is country-dependent: apart from the `country` discriminator and
/// the echoed `is_resident` flag, the record is a flat map from field name to
/// (usually numeric) value. The map preserves wire order, which is the display
/// order used when the country has no known template. The record is treated
/// as immutable once received; presentation never writes back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Discriminator selecting the per-country schema.
    pub country: String,

    /// Residency status echoed from the request.
    #[serde(default)]
    pub is_resident: bool,

    /// Everything else: `gross_income`, taxes, contributions, derived totals.
    /// Values are kept as raw JSON so a malformed field degrades to the
    /// `$0.00` sentinel instead of failing the whole response.
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl TaxResult {
    /// The parsed country discriminator.
    pub fn country(&self) -> Country {
        Country::from_discriminator(&self.country)
    }

    /// Whether the result carries a field with this name, numeric or not.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Numeric value of a field. `None` when the field is absent or not a
    /// number (permissive handling of partial/malformed results).
    pub fn amount(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}
