use super::*;
use session::{AuthContext, AuthPhase, Credentials, Role, TOKEN_KEY, USER_KEY, User};

fn storage_in(dir: &tempfile::TempDir) -> FileStorage {
    FileStorage::new(dir.path().join("nested").join("session.json"))
}

fn user() -> User {
    User { id: "u-1".to_owned(), email: "ana@firma.com".to_owned(), role: Role::Admin, name: None }
}

// =============================================================
// Key/value behavior
// =============================================================

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn set_creates_parent_directories_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set(TOKEN_KEY, "abc").unwrap();
    assert!(storage.path().exists());
    assert_eq!(FileStorage::new(storage.path()).get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn set_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set(TOKEN_KEY, "abc").unwrap();
    assert!(!storage.path().with_extension("json.tmp").exists());
}

#[test]
fn remove_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, "{}").unwrap();
    storage.remove(TOKEN_KEY);
    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn garbage_file_reads_as_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
    fs::write(storage.path(), "not json").unwrap();
    assert_eq!(storage.get(TOKEN_KEY), None);
    storage.set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[cfg(unix)]
#[test]
fn session_file_is_private_to_the_owner() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set(TOKEN_KEY, "secret").unwrap();
    storage.set(USER_KEY, "{}").unwrap();

    let file_mode = fs::metadata(storage.path()).unwrap().permissions().mode();
    assert_eq!(file_mode & 0o077, 0, "session file mode {file_mode:o}");
    let dir_mode = fs::metadata(storage.path().parent().unwrap()).unwrap().permissions().mode();
    assert_eq!(dir_mode & 0o077, 0, "session dir mode {dir_mode:o}");
}

// =============================================================
// Session lifecycle across invocations
// =============================================================

#[test]
fn login_survives_a_new_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut first = AuthContext::new(FileStorage::new(&path), Credentials::new());
    first.initialize("/");
    first.login("tok-1", user()).unwrap();

    let credentials = Credentials::new();
    let mut second = AuthContext::new(FileStorage::new(&path), credentials.clone());
    assert!(second.initialize("/").is_none());
    assert_eq!(second.phase(), &AuthPhase::Authenticated(user()));
    assert_eq!(credentials.token().as_deref(), Some("tok-1"));
}

#[test]
fn logout_clears_the_file_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut ctx = AuthContext::new(FileStorage::new(&path), Credentials::new());
    ctx.initialize("/");
    ctx.login("tok-1", user()).unwrap();
    ctx.logout();

    let storage = FileStorage::new(&path);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}
