pub mod app;
pub mod cascade;
pub mod charts;
pub mod logging;
pub mod selector;

pub use app::{EstimatorApp, ResultArea};
pub use cascade::{LocationCascade, OptionSource};
pub use charts::{ChartHandle, ChartKind, ChartRenderer, ChartSlot, ChartSlots, ChartSpec};
pub use selector::Selector;
