use super::*;

fn user_json(role: &str) -> String {
    format!(r#"{{"id":"1","email":"a@a.com","role":"{role}"}}"#)
}

// =============================================================
// Role wire names
// =============================================================

#[test]
fn role_parses_backend_names() {
    let admin: User = serde_json::from_str(&user_json("ADMIN")).unwrap();
    let lawyer: User = serde_json::from_str(&user_json("ADVOGADO")).unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(lawyer.role, Role::Member);
}

#[test]
fn role_accepts_member_alias() {
    let user: User = serde_json::from_str(&user_json("MEMBER")).unwrap();
    assert_eq!(user.role, Role::Member);
    assert_eq!(Role::parse("MEMBER"), Some(Role::Member));
}

#[test]
fn unknown_role_is_rejected() {
    assert!(serde_json::from_str::<User>(&user_json("SUPERUSER")).is_err());
    assert_eq!(Role::parse("superuser"), None);
}

#[test]
fn role_serializes_to_backend_name() {
    assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"ADVOGADO\"");
    assert_eq!(Role::Admin.to_string(), "ADMIN");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_reads_optional_nome() {
    let user: User =
        serde_json::from_str(r#"{"id":"7","email":"b@b.com","role":"ADMIN","nome":"Beatriz"}"#).unwrap();
    assert_eq!(user.name.as_deref(), Some("Beatriz"));
    assert_eq!(user.display_name(), "Beatriz");
    assert!(user.is_admin());
}

#[test]
fn display_name_falls_back_when_missing_or_blank() {
    let mut user: User = serde_json::from_str(&user_json("ADVOGADO")).unwrap();
    assert_eq!(user.display_name(), "Usuário");
    user.name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "Usuário");
}

#[test]
fn user_without_name_omits_nome_when_serialized() {
    let user: User = serde_json::from_str(&user_json("ADMIN")).unwrap();
    let raw = serde_json::to_string(&user).unwrap();
    assert!(!raw.contains("nome"));
}
