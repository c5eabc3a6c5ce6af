//! Persisted session record: one token key and one JSON user key.
//!
//! INVARIANTS
//! ==========
//! - A record is valid only when both keys are present, the token is
//!   non-empty, and the user payload parses.
//! - `save` never leaves a half-written record behind: on failure both keys
//!   are removed.
//! - `clear` removes both keys and may be called any number of times.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::storage::{SessionStorage, StorageError};
use crate::user::{Session, User};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "adv-token";
/// Storage key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "adv-user";

/// Errors raised while reading or writing the session record.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The persisted user payload is not a valid user record.
    #[error("stored user record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Session persistence over any [`SessionStorage`] backend.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `token` and `user` as a single record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when either write fails; both keys
    /// are cleared before returning.
    pub fn save(&self, token: &str, user: &User) -> Result<(), SessionError> {
        let raw_user = serde_json::to_string(user)?;
        // Drop any previous token first and write the new one last, so the
        // new user is never readable alongside a stale token.
        self.storage.remove(TOKEN_KEY);
        let written = self
            .storage
            .set(USER_KEY, &raw_user)
            .and_then(|()| self.storage.set(TOKEN_KEY, token));
        if let Err(e) = written {
            self.clear();
            return Err(e.into());
        }
        Ok(())
    }

    /// Read the record, distinguishing "nothing stored" from "stored but corrupt".
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] when both keys exist but the user
    /// payload does not parse.
    pub fn read(&self) -> Result<Option<Session>, SessionError> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self.storage.get(USER_KEY);
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw_user)?;
        Ok(Some(Session { token, user }))
    }

    /// Load the record, treating corruption the same as absence.
    pub fn load(&self) -> Option<Session> {
        self.read().ok().flatten()
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
