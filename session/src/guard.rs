//! Authentication and role gate for protected views.
//!
//! DESIGN
//! ======
//! [`authorize`] is a pure decision over the current [`AuthPhase`]. Executing
//! the decision (clearing a stale session, navigating) is a separate step in
//! [`RouteGuard::evaluate`], which only acts when the decision changes so a
//! view that re-renders many times redirects once.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::context::{AuthContext, AuthPhase};
use crate::storage::SessionStorage;
use crate::user::Role;

/// Well-known navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    Login,
    Home,
}

impl Navigation {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Why a view may not render, and what to do about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Denial {
    pub redirect: Navigation,
    /// Clear any leftover session state before redirecting.
    pub clear_session: bool,
}

/// Outcome of [`authorize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(Denial),
}

impl Access {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Decide whether a view requiring `required_role` may render.
///
/// A phase that has not settled yet counts as unauthenticated.
#[must_use]
pub fn authorize(phase: &AuthPhase, required_role: Option<Role>) -> Access {
    let Some(user) = phase.user() else {
        return Access::Denied(Denial { redirect: Navigation::Login, clear_session: true });
    };
    match required_role {
        Some(role) if user.role != role => {
            Access::Denied(Denial { redirect: Navigation::Home, clear_session: false })
        }
        _ => Access::Granted,
    }
}

/// Executes navigation for a guard decision.
pub trait Navigator {
    fn navigate(&mut self, to: Navigation);
}

impl<F: FnMut(Navigation)> Navigator for F {
    fn navigate(&mut self, to: Navigation) {
        self(to);
    }
}

/// Stateful guard for one mounted view.
#[derive(Clone, Debug, Default)]
pub struct RouteGuard {
    required_role: Option<Role>,
    last: Option<Access>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(required_role: Option<Role>) -> Self {
        Self { required_role, last: None }
    }

    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Re-check access; returns `true` when the view may render.
    ///
    /// A denial is executed only the first time it is observed: the session
    /// is cleared if the denial asks for it, then `navigator` is called once.
    pub fn evaluate<S, N>(&mut self, auth: &mut AuthContext<S>, navigator: &mut N) -> bool
    where
        S: SessionStorage,
        N: Navigator + ?Sized,
    {
        let access = authorize(auth.phase(), self.required_role);
        if self.last == Some(access) {
            return access.is_granted();
        }
        self.last = Some(access);

        match access {
            Access::Granted => true,
            Access::Denied(denial) => {
                if denial.clear_session {
                    auth.logout();
                }
                tracing::debug!(to = denial.redirect.path(), "guard redirect");
                navigator.navigate(denial.redirect);
                false
            }
        }
    }
}
