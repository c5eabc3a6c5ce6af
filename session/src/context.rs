//! Process-wide "who is logged in" state.
//!
//! ARCHITECTURE
//! ============
//! `Uninitialized -> Loading -> {Authenticated(user) | Anonymous}` on startup,
//! then `login`/`logout` move between the two settled phases. Every
//! transition keeps three things in lockstep: the phase, the persisted
//! record, and the shared [`Credentials`] read by the HTTP layer.
//!
//! Startup is one-shot. Redirects are returned as values instead of being
//! executed here, so the caller can drop one whose view is gone.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::credentials::Credentials;
use crate::guard::Navigation;
use crate::storage::SessionStorage;
use crate::store::{SessionError, SessionStore};
use crate::user::User;

/// Lifecycle phase of the auth context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthPhase {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// `true` until startup has settled into a final phase.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }
}

/// A navigation computed for the view at `from`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: Navigation,
}

impl Redirect {
    /// Whether the redirect is still meaningful for the view now at `current_path`.
    #[must_use]
    pub fn applies_to(&self, current_path: &str) -> bool {
        self.from == current_path
    }
}

/// Owns the session store and the shared credentials for one application load.
#[derive(Debug)]
pub struct AuthContext<S> {
    store: SessionStore<S>,
    credentials: Credentials,
    phase: AuthPhase,
}

impl<S: SessionStorage> AuthContext<S> {
    pub fn new(storage: S, credentials: Credentials) -> Self {
        Self { store: SessionStore::new(storage), credentials, phase: AuthPhase::Uninitialized }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.phase.user()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Move `Uninitialized -> Loading`. Returns `false` if startup already began.
    pub fn begin(&mut self) -> bool {
        if self.phase != AuthPhase::Uninitialized {
            return false;
        }
        self.phase = AuthPhase::Loading;
        true
    }

    /// Recover the persisted session and settle the phase.
    ///
    /// Runs once per context; later calls return `None` without touching
    /// state. When a session is recovered while the view is the login
    /// screen, a redirect to home is returned for the caller to execute.
    pub fn initialize(&mut self, current_path: &str) -> Option<Redirect> {
        if self.phase == AuthPhase::Uninitialized {
            self.begin();
        }
        if self.phase != AuthPhase::Loading {
            return None;
        }

        match self.store.read() {
            Ok(Some(session)) => {
                self.credentials.set(&session.token);
                tracing::debug!(user_id = %session.user.id, "session recovered");
                self.phase = AuthPhase::Authenticated(session.user);
                (current_path == Navigation::Login.path())
                    .then(|| Redirect { from: current_path.to_owned(), to: Navigation::Home })
            }
            Ok(None) => {
                self.credentials.clear();
                self.phase = AuthPhase::Anonymous;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable session");
                self.logout();
                None
            }
        }
    }

    /// Record an already-completed backend login.
    ///
    /// No network call happens here. Replaces any previous session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the record could not be persisted; the
    /// context is then Anonymous with no credentials.
    pub fn login(&mut self, token: &str, user: User) -> Result<(), SessionError> {
        if let Err(e) = self.store.save(token, &user) {
            self.credentials.clear();
            self.phase = AuthPhase::Anonymous;
            return Err(e);
        }
        self.credentials.set(token);
        tracing::info!(user_id = %user.id, role = %user.role, "logged in");
        self.phase = AuthPhase::Authenticated(user);
        Ok(())
    }

    /// Clear the persisted record and the credentials. Idempotent.
    pub fn logout(&mut self) {
        self.store.clear();
        self.credentials.clear();
        if self.phase != AuthPhase::Anonymous {
            tracing::debug!("session cleared");
        }
        self.phase = AuthPhase::Anonymous;
    }
}
