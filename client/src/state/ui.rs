//! Local UI chrome state (privacy mode, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth and data layers so
//! rendering controls can evolve independently of backend payloads.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::format::{format_brl, mask};

/// UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mask monetary values on the dashboard and customer list.
    pub privacy_mode: bool,
    /// Sidebar expanded on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_privacy(privacy_mode: bool) -> Self {
        Self { privacy_mode, ..Self::default() }
    }

    /// Currency text for `value`, masked while privacy mode is on.
    #[must_use]
    pub fn money(&self, value: f64) -> String {
        mask(format_brl(value), self.privacy_mode)
    }
}
