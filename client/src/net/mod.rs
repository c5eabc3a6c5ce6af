//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request shapes and payload types live in the `api` crate; `api` here is
//! the browser transport that executes them with `gloo-net`.

pub mod api;
