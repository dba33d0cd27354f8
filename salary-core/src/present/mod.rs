//! Result presentation pipeline.
//!
//! Transforms one [`TaxResult`](crate::TaxResult) into everything the result
//! area renders: an ordered breakdown table, a composition (doughnut) chart
//! dataset, and a derived-percentage (bar) chart dataset. The pipeline is
//! pure; chart handle ownership lives with the caller.

mod breakdown;
mod charts;
mod schema;

pub use breakdown::{BreakdownRow, breakdown_rows};
pub use charts::{ChartDataset, composition_dataset, contribution_dataset};
pub use schema::field_order;

use crate::result::TaxResult;

/// Everything derived from one submitted result.
///
/// Recomputed in full for every new result; there is no partial or merged
/// update. `contribution` is `None` when no employer-side contribution field
/// is present or when gross income is missing or zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPresentation {
    pub rows: Vec<BreakdownRow>,
    pub composition: ChartDataset,
    pub contribution: Option<ChartDataset>,
}

impl ResultPresentation {
    pub fn from_result(result: &TaxResult) -> Self {
        Self {
            rows: breakdown_rows(result),
            composition: composition_dataset(result),
            contribution: contribution_dataset(result),
        }
    }
}
