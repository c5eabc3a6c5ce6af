//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The [`AuthContext`] that owns the persisted session lives in a
//! `StoredValue`; components observe an [`AuthState`] signal mirrored from it
//! after every transition. Only the mirror is reactive, so guard effects can
//! track it without re-running on writes they cause themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{
    Access, AuthContext, AuthPhase, Credentials, Navigator, Redirect, Role, RouteGuard, SessionError, StorageError, User,
    authorize,
};

use crate::util::storage::BrowserStorage;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn from_phase(phase: &AuthPhase) -> Self {
        Self { user: phase.user().cloned(), loading: phase.is_pending() }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Access decision for a view needing `required_role`; loading counts as denied.
    #[must_use]
    pub fn access(&self, required_role: Option<Role>) -> Access {
        let phase = match (&self.user, self.loading) {
            (Some(user), false) => AuthPhase::Authenticated(user.clone()),
            _ => AuthPhase::Anonymous,
        };
        authorize(&phase, required_role)
    }
}

/// Copyable handle to the app-wide auth context, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct Auth {
    context: StoredValue<AuthContext<BrowserStorage>>,
    state: RwSignal<AuthState>,
}

impl Auth {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            context: StoredValue::new(AuthContext::new(BrowserStorage, credentials)),
            state: RwSignal::new(AuthState::default()),
        }
    }

    #[must_use]
    pub fn state(self) -> RwSignal<AuthState> {
        self.state
    }

    fn sync(self) {
        let Some(next) = self.context.try_with_value(|ctx| AuthState::from_phase(ctx.phase())) else {
            return;
        };
        if self.state.get_untracked() != next {
            self.state.set(next);
        }
    }

    /// Recover the persisted session once; see [`AuthContext::initialize`].
    pub fn initialize(self, current_path: &str) -> Option<Redirect> {
        let redirect = self.context.try_update_value(|ctx| ctx.initialize(current_path)).flatten();
        self.sync();
        redirect
    }

    /// Record a completed backend login.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the session could not be persisted,
    /// including when the context has already been disposed.
    pub fn login(self, token: &str, user: User) -> Result<(), SessionError> {
        let result = self
            .context
            .try_update_value(|ctx| ctx.login(token, user))
            .unwrap_or(Err(SessionError::Storage(StorageError::Unavailable)));
        self.sync();
        result
    }

    pub fn logout(self) {
        self.context.try_update_value(AuthContext::logout);
        self.sync();
    }

    /// Run `guard` against the context, navigating through `navigator` on denial.
    pub fn evaluate<N: Navigator>(self, guard: &mut RouteGuard, navigator: &mut N) -> bool {
        let granted = self.context.try_update_value(|ctx| guard.evaluate(ctx, navigator)).unwrap_or(false);
        self.sync();
        granted
    }
}
