//! Bearer credentials shared between the auth context and the HTTP layer.
//!
//! DESIGN
//! ======
//! The HTTP client is constructed with a clone of [`Credentials`] and reads
//! the token at request-build time. Only the auth context writes it, through
//! the explicit `set`/`clear` methods, so there is no module-level header
//! state to drift out of sync with the persisted session.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Arc, RwLock};

/// Cloneable handle to the current bearer token.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    token: Arc<RwLock<Option<String>>>,
}

impl Credentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token.
    pub fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_owned());
        }
    }

    /// Drop the current token so later requests go out unauthenticated.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Value for the `Authorization` header, if a token is present.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}
