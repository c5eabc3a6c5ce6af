//! Typed contract with the back-office REST backend.
//!
//! The backend owns persistence, validation, and every business rule. This
//! crate only describes what can be asked of it: which endpoints exist, what
//! each one accepts and returns, and how a response is checked before it
//! reaches a view. Requests are built as transport-neutral [`ApiRequest`]
//! values; the browser sends them with `gloo-net` and the CLI with `reqwest`.

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod request;
pub mod types;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, decode, decode_empty};
pub use pagination::{Page, PageMeta};
pub use request::{ApiRequest, CONTENT_TYPE, Method};
