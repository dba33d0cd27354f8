//! Fixed per-country presentation schemas.
//!
//! Field order, composition-chart fields, and employer-contribution probes
//! are data here; the logic that consumes them lives in the sibling modules.

use crate::country::Country;

/// Breakdown display order for United States results.
const FIELD_ORDER_US: &[&str] = &[
    "gross_income",
    "taxable_income",
    "federal_tax",
    "state_tax",
    "local_tax",
    "social_security_tax",
    "medicare_tax",
    "total_tax",
    "employee_401k_contribution",
    "employer_401k_contribution",
    "net_income",
    "total_compensation",
];

/// Breakdown display order for Singapore results.
const FIELD_ORDER_SG: &[&str] = &[
    "gross_income",
    "income_tax",
    "employee_cpf_contribution",
    "employer_cpf_contribution",
    "net_income",
    "total_compensation",
    "real_compensation",
];

/// Breakdown display order for China results.
const FIELD_ORDER_CN: &[&str] = &[
    "gross_income",
    "standard_deduction",
    "taxable_income",
    "income_tax",
    "employee_social_insurance",
    "employer_social_insurance",
    "net_income",
    "total_compensation",
    "real_compensation",
];

/// The fixed breakdown order for a country, or `None` when the country has
/// no known template and the result's own key order should be used.
pub fn field_order(country: Country) -> Option<&'static [&'static str]> {
    match country {
        Country::UnitedStates => Some(FIELD_ORDER_US),
        Country::Singapore => Some(FIELD_ORDER_SG),
        Country::China => Some(FIELD_ORDER_CN),
        Country::Unknown => None,
    }
}

/// Composition-chart series as `(label, result key)` pairs, in display order.
pub(crate) fn composition_fields(country: Country) -> &'static [(&'static str, &'static str)] {
    match country {
        Country::UnitedStates => &[
            ("Net Income", "net_income"),
            ("Federal Tax", "federal_tax"),
            ("State Tax", "state_tax"),
            ("Local Tax", "local_tax"),
            ("Social Security Tax", "social_security_tax"),
            ("Medicare Tax", "medicare_tax"),
            ("401(k) Contribution", "employee_401k_contribution"),
        ],
        Country::Singapore => &[
            ("Net Income", "net_income"),
            ("Income Tax", "income_tax"),
            ("Employee CPF", "employee_cpf_contribution"),
        ],
        Country::China => &[
            ("Net Income", "net_income"),
            ("Income Tax", "income_tax"),
            ("Employee Social Insurance", "employee_social_insurance"),
        ],
        Country::Unknown => &[],
    }
}

/// Employer-side contribution fields, probed in order. The first key present
/// in a result identifies the jurisdiction for the derived-percentage chart;
/// this sub-step deliberately infers the country from the field set rather
/// than from the discriminator.
pub(crate) const EMPLOYER_CONTRIBUTION_PROBES: &[(&str, &str)] = &[
    ("employer_cpf_contribution", "Employer CPF Contribution"),
    ("employer_401k_contribution", "Employer 401(k) Contribution"),
    ("employer_social_insurance", "Employer Social Insurance"),
];
