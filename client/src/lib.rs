//! # client
//!
//! Leptos + WASM frontend for the law-firm back-office.
//!
//! Pages render authenticated CRUD screens over the remote REST backend
//! (customers, processes, fees, users) plus the financial dashboard. Session
//! recovery, login/logout, and route protection come from the `session`
//! crate; request shapes and payload types come from the `api` crate. This
//! crate adds the browser glue: `localStorage`, `gloo-net`, and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
