//! Privacy-mode preference.
//!
//! Privacy mode hides monetary values behind a mask so the dashboard can be
//! shown on a shared screen. The preference is kept in `localStorage` and read
//! back on the next load. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! and render values unmasked until hydration applies the stored preference.

#[cfg(test)]
#[path = "privacy_test.rs"]
mod privacy_test;

/// Placeholder for hidden non-monetary values such as contact details.
pub const HIDDEN: &str = "••••••";

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "adv-privacy";

/// Read the stored privacy preference; `false` when nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .is_some_and(|val| val == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Toggle privacy mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
