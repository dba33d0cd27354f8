pub mod country;
pub mod currency;
pub mod fields;
pub mod present;
pub mod result;

pub use country::Country;
pub use fields::{FieldGroup, FieldVisibility, visible_field_group};
pub use present::{BreakdownRow, ChartDataset, ResultPresentation};
pub use result::TaxResult;
