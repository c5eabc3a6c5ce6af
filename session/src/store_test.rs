use super::*;
use crate::storage::MemoryStorage;
use crate::user::Role;
use std::sync::{Arc, Mutex};

fn admin() -> User {
    User { id: "1".to_owned(), email: "a@a.com".to_owned(), role: Role::Admin, name: None }
}

/// Storage that accepts the user record but rejects the token write.
#[derive(Clone, Default)]
struct RejectTokenStorage {
    inner: MemoryStorage,
}

impl SessionStorage for RejectTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == TOKEN_KEY {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

/// Records what a concurrent reader would load right after each user write.
#[derive(Clone, Default)]
struct ObservingStorage {
    inner: MemoryStorage,
    seen: Arc<Mutex<Vec<Option<Session>>>>,
}

impl SessionStorage for ObservingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)?;
        if key == USER_KEY {
            let snapshot = SessionStore::new(self.inner.clone()).load();
            self.seen.lock().unwrap().push(snapshot);
        }
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

fn member() -> User {
    User { id: "2".to_owned(), email: "b@b.com".to_owned(), role: Role::Member, name: None }
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_returns_same_record() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save("abc", &admin()).unwrap();
    let session = store.load().unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user, admin());
}

#[test]
fn save_writes_both_keys() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.save("abc", &admin()).unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert!(storage.get(USER_KEY).unwrap().contains("a@a.com"));
}

#[test]
fn failed_save_leaves_no_partial_record() {
    let storage = RejectTokenStorage::default();
    let store = SessionStore::new(storage.clone());
    let err = store.save("abc", &admin()).unwrap_err();
    assert!(matches!(err, SessionError::Storage(StorageError::Write(_))));
    assert!(storage.get(USER_KEY).is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(store.load().is_none());
}

#[test]
fn replacing_a_session_never_pairs_new_user_with_old_token() {
    let storage = ObservingStorage::default();
    let store = SessionStore::new(storage.clone());
    store.save("old-token", &admin()).unwrap();
    store.save("new-token", &member()).unwrap();

    let seen = storage.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(Option::is_none), "intermediate record visible: {seen:?}");
    let session = store.load().unwrap();
    assert_eq!(session.token, "new-token");
    assert_eq!(session.user, member());
}

// =============================================================
// partial and corrupt records
// =============================================================

#[test]
fn load_is_none_when_empty() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(store.load().is_none());
    assert!(store.read().unwrap().is_none());
}

#[test]
fn load_is_none_when_user_missing() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    let store = SessionStore::new(storage);
    assert!(store.read().unwrap().is_none());
}

#[test]
fn load_is_none_when_token_missing_or_empty() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, &serde_json::to_string(&admin()).unwrap()).unwrap();
    let store = SessionStore::new(storage.clone());
    assert!(store.read().unwrap().is_none());

    storage.set(TOKEN_KEY, "").unwrap();
    assert!(store.read().unwrap().is_none());
}

#[test]
fn corrupt_user_is_reported_by_read_and_hidden_by_load() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();
    let store = SessionStore::new(storage);
    assert!(matches!(store.read(), Err(SessionError::Corrupt(_))));
    assert!(store.load().is_none());
}

#[test]
fn user_with_wrong_shape_is_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, r#"{"id":"1","email":"a@a.com","role":"ROOT"}"#).unwrap();
    let store = SessionStore::new(storage);
    assert!(matches!(store.read(), Err(SessionError::Corrupt(_))));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_is_idempotent() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.save("abc", &admin()).unwrap();
    store.clear();
    store.clear();
    assert!(store.load().is_none());
    assert!(storage.is_empty());
}
