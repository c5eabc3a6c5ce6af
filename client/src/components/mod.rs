//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (sidebar, paging, empty lists) and the
//! route guard wrapper, reading auth and UI state from Leptos context.

pub mod empty_state;
pub mod pagination;
pub mod privacy_toggle;
pub mod protected;
pub mod sidebar;
