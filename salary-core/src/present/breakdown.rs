//! Ordered, human-readable breakdown rows.

use crate::currency::format_currency;
use crate::present::schema::field_order;
use crate::result::TaxResult;

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub label: String,
    pub formatted_value: String,
}

/// Builds the breakdown table for a result.
///
/// Keys are taken in the country's fixed template order; keys the result does
/// not carry are silently skipped, never zero-filled. A country without a
/// template falls back to the result's own key order. Labels are the key with
/// underscores replaced by spaces and each word capitalized; values go through
/// [`format_currency`], so non-numeric values render as the `$0.00` sentinel.
pub fn breakdown_rows(result: &TaxResult) -> Vec<BreakdownRow> {
    match field_order(result.country()) {
        Some(order) => order
            .iter()
            .filter(|key| result.contains(key))
            .map(|key| row_for(result, key))
            .collect(),
        None => result
            .fields
            .keys()
            .map(|key| row_for(result, key))
            .collect(),
    }
}

fn row_for(result: &TaxResult, key: &str) -> BreakdownRow {
    BreakdownRow {
        label: title_case(key),
        formatted_value: format_currency(result.amount(key)),
    }
}

/// `snake_case` key to Title Case label: underscores become spaces, the first
/// character of each word is uppercased.
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
