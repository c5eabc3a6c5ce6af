//! Client-side session lifecycle for the back-office.
//!
//! This crate owns the pieces both front ends share: the persisted session
//! record, the auth context that recovers it on startup, the bearer
//! credentials handed to the HTTP layer, and the route guard that turns
//! "who is logged in" into render-or-redirect decisions.
//!
//! Nothing here touches a browser or a network socket. Storage is behind
//! [`SessionStorage`] and navigation behind [`Navigator`], so the `client`
//! crate plugs in `localStorage` + the Leptos router and the `cli` crate plugs
//! in a JSON file.

pub mod context;
pub mod credentials;
pub mod guard;
pub mod storage;
pub mod store;
pub mod user;

pub use context::{AuthContext, AuthPhase, Redirect};
pub use credentials::Credentials;
pub use guard::{Access, Denial, Navigation, Navigator, RouteGuard, authorize};
pub use storage::{MemoryStorage, SessionStorage, StorageError};
pub use store::{SessionError, SessionStore, TOKEN_KEY, USER_KEY};
pub use user::{Role, Session, User};
