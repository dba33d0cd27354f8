//! Jurisdiction field-visibility controller.
//!
//! A pure mapping from `(country, is_resident)` to the set of
//! country-specific input groups that should be visible. At most one group
//! is visible at a time, and the whole set is recomputed from scratch on
//! every relevant input change so the UI can apply it atomically.

use crate::country::Country;

/// A country-specific group of form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Age input feeding the CPF calculation.
    Singapore,
    /// 401(k) contribution and employer-match inputs.
    /// Shown only for residents; non-resident aliens cannot contribute.
    UnitedStates,
    /// Social-insurance inputs.
    China,
}

/// Which input group should be shown, if any.
///
/// United States respects residency; Singapore and China ignore it.
/// Unknown or empty countries show no group.
pub fn visible_field_group(country: Country, is_resident: bool) -> Option<FieldGroup> {
    match country {
        Country::Singapore => Some(FieldGroup::Singapore),
        Country::UnitedStates if is_resident => Some(FieldGroup::UnitedStates),
        Country::UnitedStates => None,
        Country::China => Some(FieldGroup::China),
        Country::Unknown => None,
    }
}

/// Visibility flags for the three country-specific input groups.
///
/// Derived, never stored incrementally: callers replace the whole record
/// on each change, which rules out transient multi-visible states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub singapore: bool,
    pub united_states: bool,
    pub china: bool,
}

impl FieldVisibility {
    /// Recomputes visibility against the full group enumeration.
    pub fn derive(country: Country, is_resident: bool) -> Self {
        let group = visible_field_group(country, is_resident);
        Self {
            singapore: group == Some(FieldGroup::Singapore),
            united_states: group == Some(FieldGroup::UnitedStates),
            china: group == Some(FieldGroup::China),
        }
    }
}
