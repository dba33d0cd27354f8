//! Country discriminator for jurisdiction-dependent behavior.
//!
//! The remote service echoes a `country` field on every result; the value
//! selects which field-order template, composition-chart schema, and input
//! group applies. Dispatching on a tagged variant instead of raw string
//! comparisons keeps every match exhaustive, so adding a country is a
//! compile-driven change rather than a silent fallthrough.

use serde::{Deserialize, Serialize};

/// A jurisdiction with a known result schema, or `Unknown` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    UnitedStates,
    Singapore,
    China,
    /// Country strings without a known schema. Presentation falls back to
    /// the result's own key order; no chart schema applies.
    Unknown,
}

impl Country {
    /// Parses the wire discriminator (exact match, case-sensitive).
    pub fn from_discriminator(value: &str) -> Self {
        match value {
            "United States" => Country::UnitedStates,
            "Singapore" => Country::Singapore,
            "China" => Country::China,
            _ => Country::Unknown,
        }
    }

    /// The wire string for a known country, if there is one.
    pub fn discriminator(self) -> Option<&'static str> {
        match self {
            Country::UnitedStates => Some("United States"),
            Country::Singapore => Some("Singapore"),
            Country::China => Some("China"),
            Country::Unknown => None,
        }
    }
}
