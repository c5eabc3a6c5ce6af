//! Dashboard filter remembered across visits.
//!
//! The selected month and year are kept as a small JSON record next to the
//! session keys. A missing, unparsable, or out-of-range record loads as `None`
//! and the dashboard falls back to the current month.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::{Deserialize, Serialize};
use session::SessionStorage;

use crate::util::format::valid_period;

/// Key for the dashboard's last selected `{month, year}`.
pub const DASHBOARD_PERIOD_KEY: &str = "adv-dashboard-period";

#[derive(Serialize, Deserialize)]
struct SavedPeriod {
    month: u32,
    year: i32,
}

/// Last saved `(month, year)`, if it is still a valid period.
pub fn load_period<S: SessionStorage>(storage: &S) -> Option<(u32, i32)> {
    let raw = storage.get(DASHBOARD_PERIOD_KEY)?;
    let saved: SavedPeriod = serde_json::from_str(&raw).ok()?;
    valid_period(saved.month, saved.year).then_some((saved.month, saved.year))
}

/// Remember `(month, year)`. Storage failures are ignored.
pub fn save_period<S: SessionStorage>(storage: &S, month: u32, year: i32) {
    let Ok(raw) = serde_json::to_string(&SavedPeriod { month, year }) else {
        return;
    };
    let _ = storage.set(DASHBOARD_PERIOD_KEY, &raw);
}
