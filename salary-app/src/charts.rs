//! Chart lifecycle management.
//!
//! Rendering is behind [`ChartRenderer`] so the app logic stays independent
//! of the charting backend. What the app owns is the *lifecycle*: each
//! result submission replaces the chart in a slot, and the handle that was
//! there before must be destroyed before the new one takes its place, or
//! the backend leaks canvases.

use salary_core::ChartDataset;

/// A live chart instance owned by a slot. Dropping the handle without
/// calling [`ChartHandle::destroy`] is a backend resource leak.
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// Chart geometry requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bar,
}

/// Everything the backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub dataset: ChartDataset,
}

impl ChartSpec {
    pub fn doughnut(title: impl Into<String>, dataset: ChartDataset) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            title: title.into(),
            dataset,
        }
    }

    pub fn bar(title: impl Into<String>, dataset: ChartDataset) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: title.into(),
            dataset,
        }
    }
}

/// Where a chart lives in the result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    /// The tax composition doughnut.
    Breakdown,
    /// The employer-contribution percentage bar.
    AdditionalCompensation,
}

/// Drawing backend. Implementations turn a [`ChartSpec`] into a live chart
/// and hand back the handle the slot will own.
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn render(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Self::Handle;
}

/// The two chart slots of the result area.
///
/// `replace` is the only way content enters a slot, which is what enforces
/// the destroy-before-replace ordering.
#[derive(Debug, Default)]
pub struct ChartSlots<H> {
    breakdown: Option<H>,
    additional_compensation: Option<H>,
}

impl<H: ChartHandle> ChartSlots<H> {
    pub fn new() -> Self {
        Self {
            breakdown: None,
            additional_compensation: None,
        }
    }

    /// Puts `next` into the slot, destroying whatever was there. `None`
    /// empties the slot (used when a result has no dataset for it).
    pub fn replace(&mut self, slot: ChartSlot, next: Option<H>) {
        let held = match slot {
            ChartSlot::Breakdown => &mut self.breakdown,
            ChartSlot::AdditionalCompensation => &mut self.additional_compensation,
        };
        if let Some(mut old) = held.take() {
            old.destroy();
        }
        *held = next;
    }

    /// Destroys both charts. Used when the result area is cleared.
    pub fn clear(&mut self) {
        self.replace(ChartSlot::Breakdown, None);
        self.replace(ChartSlot::AdditionalCompensation, None);
    }

    pub fn is_filled(&self, slot: ChartSlot) -> bool {
        match slot {
            ChartSlot::Breakdown => self.breakdown.is_some(),
            ChartSlot::AdditionalCompensation => self.additional_compensation.is_some(),
        }
    }
}
