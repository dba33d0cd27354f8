//! Dropdown selector state.
//!
//! The app never touches widgets directly; each dependent dropdown is
//! modeled as a small record the UI layer mirrors. A populated selector
//! always carries an implicit leading "unselected" entry, represented here
//! by `value == None`.

/// Visible state of one dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub visible: bool,
    /// Disabled selectors are read-only; used when a level auto-collapsed
    /// to its only legal option.
    pub enabled: bool,
    /// Options in the order received from the service (never re-sorted),
    /// not counting the leading unselected entry.
    pub options: Vec<String>,
    /// `None` means the leading unselected entry is active.
    pub value: Option<String>,
}

impl Selector {
    /// Replaces the option list, resets the value to unselected, and shows
    /// the selector enabled. Auto-collapse is applied by the caller.
    pub fn populate(&mut self, options: Vec<String>) {
        self.options = options;
        self.value = None;
        self.visible = true;
        self.enabled = true;
    }

    /// Hides the selector and clears everything it held.
    pub fn hide(&mut self) {
        *self = Selector::default();
    }

    /// Locks the selector onto its single legal option.
    pub fn collapse_to(&mut self, option: String) {
        self.value = Some(option);
        self.enabled = false;
    }

    pub fn selected(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
