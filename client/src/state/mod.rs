//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` mirrors the session lifecycle for guards and user-aware components;
//! `ui` holds presentation toggles that outlive a single page.

pub mod auth;
pub mod ui;
