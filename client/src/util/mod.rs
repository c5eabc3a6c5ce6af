//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod confirm;
pub mod format;
pub mod privacy;
pub mod storage;
pub mod ui_persistence;
