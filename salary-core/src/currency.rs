//! Currency rendering for the breakdown table.
//!
//! Every displayed amount is `$` followed by the number with thousands
//! separators and exactly two decimal places, rounded half-up. Absent,
//! zero, or non-numeric source values render as the `$0.00` sentinel;
//! that sentinel is a defined fallback, never an error.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fallback rendering for absent, falsy, or non-numeric values.
pub const ZERO_SENTINEL: &str = "$0.00";

/// Formats an optional amount for display.
///
/// `None`, zero, and non-finite values all collapse to [`ZERO_SENTINEL`].
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 && value.is_finite() => format_amount(value),
        _ => ZERO_SENTINEL.to_string(),
    }
}

/// Formats a finite, non-zero amount: half-up rounding to two places,
/// thousands separators, leading `$` (sign between `$` and digits).
fn format_amount(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return ZERO_SENTINEL.to_string();
    };
    let mut rounded =
        decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

/// Inserts a comma before every group of three digits, counting from the right.
fn group_thousands(int_part: &str) -> String {
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    grouped
}
