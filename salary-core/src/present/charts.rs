//! Chart dataset projections.
//!
//! Charts are rendered by an external library whose contract is "labels plus
//! a numeric series"; this module only produces those pairs. Both datasets
//! are recomputed in full for every new result.

use tracing::debug;

use crate::present::schema::{EMPLOYER_CONTRIBUTION_PROBES, composition_fields};
use crate::result::TaxResult;

/// Parallel labels and values ready to hand to a chart renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartDataset {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Composition (doughnut) dataset: how gross income decomposes into net
/// income and deductions. Fields the result does not carry are dropped from
/// both series, keeping them parallel; an unknown country yields an empty
/// dataset and the chart simply renders nothing.
pub fn composition_dataset(result: &TaxResult) -> ChartDataset {
    let mut dataset = ChartDataset::default();
    for (label, key) in composition_fields(result.country()) {
        match result.amount(key) {
            Some(value) => {
                dataset.labels.push((*label).to_string());
                dataset.values.push(value);
            }
            None => debug!(key, "composition field missing from result; dropped"),
        }
    }
    dataset
}

/// Derived-percentage (bar) dataset: one employer-paid contribution as a
/// percentage of gross income.
///
/// The jurisdiction is inferred from which employer-side field is present,
/// not from the discriminator. Returns `None` when no employer field is
/// present, or when gross income is missing or zero — the chart slot is
/// left empty rather than propagating a non-finite value.
pub fn contribution_dataset(result: &TaxResult) -> Option<ChartDataset> {
    let (key, label) = EMPLOYER_CONTRIBUTION_PROBES
        .iter()
        .find(|(key, _)| result.contains(key))?;

    let contribution = result.amount(key)?;
    let gross_income = result.amount("gross_income").filter(|g| *g != 0.0)?;

    let percentage = contribution / gross_income * 100.0;
    if !percentage.is_finite() {
        debug!(key, "non-finite contribution percentage; dropped");
        return None;
    }

    Some(ChartDataset {
        labels: vec![(*label).to_string()],
        values: vec![percentage],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn china_result() -> TaxResult {
        serde_json::from_value(json!({
            "country": "China",
            "is_resident": true,
            "gross_income": 200000.0,
            "income_tax": 15000.0,
            "employee_social_insurance": 21000.0,
            "employer_social_insurance": 14000.0,
            "net_income": 164000.0,
            "total_compensation": 214000.0
        }))
        .unwrap()
    }

    #[test]
    fn composition_uses_the_country_schema() {
        let dataset = composition_dataset(&china_result());

        assert_eq!(
            dataset.labels,
            ["Net Income", "Income Tax", "Employee Social Insurance"]
        );
        assert_eq!(dataset.values, [164000.0, 15000.0, 21000.0]);
    }

    #[test]
    fn composition_drops_missing_fields_from_both_series() {
        let result: TaxResult = serde_json::from_value(json!({
            "country": "Singapore",
            "net_income": 88600.0,
            "employee_cpf_contribution": 5400.0
        }))
        .unwrap();

        let dataset = composition_dataset(&result);

        assert_eq!(dataset.labels, ["Net Income", "Employee CPF"]);
        assert_eq!(dataset.values, [88600.0, 5400.0]);
    }

    #[test]
    fn composition_is_empty_for_unknown_country() {
        let result: TaxResult = serde_json::from_value(json!({
            "country": "Atlantis",
            "net_income": 100.0
        }))
        .unwrap();

        assert!(composition_dataset(&result).is_empty());
    }

    #[test]
    fn contribution_infers_jurisdiction_from_the_field_set() {
        let dataset = contribution_dataset(&china_result()).unwrap();

        assert_eq!(dataset.labels, ["Employer Social Insurance"]);
        assert_eq!(dataset.values, [7.0]);
    }

    #[test]
    fn contribution_probes_cpf_before_401k() {
        // A result carrying both employer fields resolves to the CPF label.
        let result: TaxResult = serde_json::from_value(json!({
            "country": "Singapore",
            "gross_income": 100000.0,
            "employer_cpf_contribution": 5700.0,
            "employer_401k_contribution": 3000.0
        }))
        .unwrap();

        let dataset = contribution_dataset(&result).unwrap();

        assert_eq!(dataset.labels, ["Employer CPF Contribution"]);
        assert_eq!(dataset.values, [5.7]);
    }

    #[test]
    fn contribution_is_none_without_an_employer_field() {
        let result: TaxResult = serde_json::from_value(json!({
            "country": "Singapore",
            "gross_income": 100000.0,
            "income_tax": 6000.0
        }))
        .unwrap();

        assert_eq!(contribution_dataset(&result), None);
    }

    #[test]
    fn contribution_is_none_for_zero_gross_income() {
        let result: TaxResult = serde_json::from_value(json!({
            "country": "Singapore",
            "gross_income": 0.0,
            "employer_cpf_contribution": 5700.0
        }))
        .unwrap();

        assert_eq!(contribution_dataset(&result), None);
    }

    #[test]
    fn contribution_is_none_for_missing_gross_income() {
        let result: TaxResult = serde_json::from_value(json!({
            "country": "United States",
            "employer_401k_contribution": 3000.0
        }))
        .unwrap();

        assert_eq!(contribution_dataset(&result), None);
    }
}
