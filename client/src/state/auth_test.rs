use super::*;
use session::{Denial, Navigation};

fn member() -> User {
    User { id: "u-1".to_owned(), email: "ana@firma.com".to_owned(), role: Role::Member, name: Some("Ana".to_owned()) }
}

fn admin() -> User {
    User { role: Role::Admin, ..member() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn from_phase_tracks_pending_phases() {
    assert!(AuthState::from_phase(&AuthPhase::Uninitialized).loading);
    assert!(AuthState::from_phase(&AuthPhase::Loading).loading);
    assert!(!AuthState::from_phase(&AuthPhase::Anonymous).loading);
}

#[test]
fn from_phase_copies_authenticated_user() {
    let state = AuthState::from_phase(&AuthPhase::Authenticated(member()));
    assert_eq!(state.user, Some(member()));
    assert!(!state.loading);
}

#[test]
fn is_admin_requires_admin_role() {
    assert!(!AuthState { user: Some(member()), loading: false }.is_admin());
    assert!(AuthState { user: Some(admin()), loading: false }.is_admin());
    assert!(!AuthState::default().is_admin());
}

#[test]
fn access_denies_while_loading() {
    let state = AuthState { user: Some(admin()), loading: true };
    assert_eq!(
        state.access(None),
        Access::Denied(Denial { redirect: Navigation::Login, clear_session: true })
    );
}

#[test]
fn access_redirects_member_away_from_admin_views() {
    let state = AuthState { user: Some(member()), loading: false };
    assert!(state.access(None).is_granted());
    assert_eq!(
        state.access(Some(Role::Admin)),
        Access::Denied(Denial { redirect: Navigation::Home, clear_session: false })
    );
}

// =============================================================
// Auth handle (non-hydrate: storage always misses)
// =============================================================

#[test]
fn initialize_without_browser_storage_settles_anonymous() {
    let owner = Owner::new();
    owner.with(|| {
        let credentials = Credentials::new();
        let auth = Auth::new(credentials.clone());
        assert!(auth.initialize("/login").is_none());
        assert_eq!(auth.state().get_untracked(), AuthState { user: None, loading: false });
        assert!(credentials.token().is_none());
    });
}

#[test]
fn login_failure_leaves_state_anonymous() {
    let owner = Owner::new();
    owner.with(|| {
        let credentials = Credentials::new();
        let auth = Auth::new(credentials.clone());
        auth.initialize("/");
        assert!(auth.login("tok", member()).is_err());
        assert!(auth.state().get_untracked().user.is_none());
        assert!(credentials.token().is_none());
    });
}

#[test]
fn login_after_dispose_reports_unavailable() {
    let owner = Owner::new();
    owner.with(|| {
        let credentials = Credentials::new();
        let auth = Auth::new(credentials.clone());
        auth.initialize("/");
        let before = auth.state().get_untracked();
        auth.context.dispose();
        let result = auth.login("tok", member());
        assert!(matches!(result, Err(SessionError::Storage(StorageError::Unavailable))));
        assert_eq!(auth.state().get_untracked(), before);
        assert!(credentials.token().is_none());
    });
}

#[test]
fn evaluate_redirects_anonymous_once() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = Auth::new(Credentials::new());
        auth.initialize("/customers");
        let mut guard = RouteGuard::new(None);
        let mut seen = Vec::new();
        let mut navigate = |to: Navigation| seen.push(to);
        assert!(!auth.evaluate(&mut guard, &mut navigate));
        assert!(!auth.evaluate(&mut guard, &mut navigate));
        assert_eq!(seen, vec![Navigation::Login]);
    });
}
