use super::*;
use crate::storage::{MemoryStorage, SessionStorage};
use crate::store::{TOKEN_KEY, USER_KEY};
use crate::user::Role;

fn user(role: Role) -> User {
    User { id: "1".to_owned(), email: "a@a.com".to_owned(), role, name: None }
}

fn context(storage: &MemoryStorage) -> AuthContext<MemoryStorage> {
    AuthContext::new(storage.clone(), Credentials::new())
}

// =============================================================
// startup
// =============================================================

#[test]
fn new_context_is_uninitialized() {
    let ctx = context(&MemoryStorage::new());
    assert_eq!(*ctx.phase(), AuthPhase::Uninitialized);
    assert!(ctx.phase().is_pending());
}

#[test]
fn begin_moves_to_loading_once() {
    let mut ctx = context(&MemoryStorage::new());
    assert!(ctx.begin());
    assert_eq!(*ctx.phase(), AuthPhase::Loading);
    assert!(!ctx.begin());
}

#[test]
fn empty_storage_resolves_anonymous_without_header() {
    let mut ctx = context(&MemoryStorage::new());
    assert_eq!(ctx.initialize("/"), None);
    assert_eq!(*ctx.phase(), AuthPhase::Anonymous);
    assert_eq!(ctx.credentials().authorization_header(), None);
}

#[test]
fn malformed_records_resolve_anonymous_without_header() {
    let records: [(Option<&str>, Option<&str>); 5] = [
        (Some("abc"), None),
        (None, Some(r#"{"id":"1","email":"a@a.com","role":"ADMIN"}"#)),
        (Some("abc"), Some("{not json")),
        (Some("abc"), Some(r#"{"id":"1"}"#)),
        (Some(""), Some(r#"{"id":"1","email":"a@a.com","role":"ADMIN"}"#)),
    ];
    for (token, user) in records {
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.set(TOKEN_KEY, token).unwrap();
        }
        if let Some(user) = user {
            storage.set(USER_KEY, user).unwrap();
        }
        let mut ctx = context(&storage);
        ctx.initialize("/");
        assert_eq!(*ctx.phase(), AuthPhase::Anonymous, "record {token:?} / {user:?}");
        assert_eq!(ctx.credentials().authorization_header(), None);
    }
}

#[test]
fn corrupt_record_is_cleared_on_startup() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();
    let mut ctx = context(&storage);
    ctx.initialize("/customers");
    assert!(storage.is_empty());
}

#[test]
fn initialize_runs_once() {
    let storage = MemoryStorage::new();
    let mut ctx = context(&storage);
    ctx.initialize("/");
    assert_eq!(*ctx.phase(), AuthPhase::Anonymous);

    // A record appearing later is not picked up by a second call.
    SessionStore::new(storage.clone()).save("abc", &user(Role::Admin)).unwrap();
    assert_eq!(ctx.initialize("/login"), None);
    assert_eq!(*ctx.phase(), AuthPhase::Anonymous);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_and_sets_header() {
    let storage = MemoryStorage::new();
    let mut ctx = context(&storage);
    ctx.initialize("/login");
    ctx.login("abc", user(Role::Admin)).unwrap();

    assert_eq!(ctx.user(), Some(&user(Role::Admin)));
    assert_eq!(ctx.credentials().authorization_header().as_deref(), Some("Bearer abc"));
    let stored = ctx.store().load().unwrap();
    assert_eq!(stored.token, "abc");
    assert_eq!(stored.user, user(Role::Admin));
}

#[test]
fn last_login_wins() {
    let storage = MemoryStorage::new();
    let mut ctx = context(&storage);
    ctx.login("first", user(Role::Admin)).unwrap();
    let other = User { id: "2".to_owned(), email: "b@b.com".to_owned(), role: Role::Member, name: None };
    ctx.login("second", other.clone()).unwrap();

    assert_eq!(ctx.user(), Some(&other));
    assert_eq!(ctx.store().load().unwrap().token, "second");
    assert_eq!(ctx.credentials().token().as_deref(), Some("second"));
}

#[test]
fn logout_clears_everything() {
    let storage = MemoryStorage::new();
    let mut ctx = context(&storage);
    ctx.login("abc", user(Role::Admin)).unwrap();
    ctx.logout();

    assert_eq!(*ctx.phase(), AuthPhase::Anonymous);
    assert!(ctx.store().load().is_none());
    assert_eq!(ctx.credentials().authorization_header(), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let once_storage = MemoryStorage::new();
    let mut once = context(&once_storage);
    once.login("abc", user(Role::Admin)).unwrap();
    once.logout();

    let twice_storage = MemoryStorage::new();
    let mut twice = context(&twice_storage);
    twice.login("abc", user(Role::Admin)).unwrap();
    twice.logout();
    twice.logout();

    assert_eq!(once.phase(), twice.phase());
    assert_eq!(once_storage.len(), twice_storage.len());
    assert_eq!(once.credentials().token(), twice.credentials().token());
}

#[test]
fn logout_from_anonymous_is_allowed() {
    let mut ctx = context(&MemoryStorage::new());
    ctx.initialize("/");
    ctx.logout();
    assert_eq!(*ctx.phase(), AuthPhase::Anonymous);
}

// =============================================================
// reload scenario
// =============================================================

#[test]
fn reload_on_login_page_recovers_and_redirects_home_once() {
    let storage = MemoryStorage::new();
    let admin = user(Role::Admin);
    let mut first = context(&storage);
    first.initialize("/login");
    first.login("abc", admin.clone()).unwrap();

    let mut reloaded = context(&storage);
    let redirect = reloaded.initialize("/login");
    assert_eq!(redirect, Some(Redirect { from: "/login".to_owned(), to: Navigation::Home }));
    assert_eq!(*reloaded.phase(), AuthPhase::Authenticated(admin));
    assert_eq!(reloaded.credentials().authorization_header().as_deref(), Some("Bearer abc"));

    assert_eq!(reloaded.initialize("/login"), None);
}

#[test]
fn reload_elsewhere_recovers_without_redirect() {
    let storage = MemoryStorage::new();
    let mut first = context(&storage);
    first.login("abc", user(Role::Member)).unwrap();

    let mut reloaded = context(&storage);
    assert_eq!(reloaded.initialize("/processes"), None);
    assert_eq!(reloaded.user().map(|u| u.role), Some(Role::Member));
}

#[test]
fn redirect_is_abandoned_after_navigation() {
    let redirect = Redirect { from: "/login".to_owned(), to: Navigation::Home };
    assert!(redirect.applies_to("/login"));
    assert!(!redirect.applies_to("/customers"));
}
