//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, inline
//! errors) and delegates shared chrome to `components`. Async results are
//! written with `try_set`/`try_update`, so a response that lands after the
//! page unmounted is dropped.

pub mod customers;
pub mod fees;
pub mod home;
pub mod login;
pub mod processes;
pub mod users;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// `:id` of an edit route, `None` on create routes.
pub(crate) fn route_id() -> Option<String> {
    use_params_map().with_untracked(|params| params.get("id")).filter(|id| !id.is_empty())
}
