use super::*;

fn draft() -> UserDraft {
    UserDraft {
        name: " Carla Dias ".to_owned(),
        email: " carla@firma.com ".to_owned(),
        password: "segredo1".to_owned(),
        role: Role::Admin,
    }
}

#[test]
fn create_requires_password() {
    let blank = UserDraft { password: String::new(), ..draft() };
    assert_eq!(validate_user(blank, false), Err("Informe uma senha."));
}

#[test]
fn edit_with_blank_password_keeps_current() {
    let blank = UserDraft { password: String::new(), ..draft() };
    let input = validate_user(blank, true).unwrap();
    assert_eq!(input.password, None);
    assert_eq!(input.name, "Carla Dias");
    assert_eq!(input.email, "carla@firma.com");
    assert_eq!(input.role, Role::Admin);
}

#[test]
fn short_password_is_rejected_on_create_and_edit() {
    let short = UserDraft { password: "12345".to_owned(), ..draft() };
    assert_eq!(validate_user(short.clone(), false), Err("A senha deve ter pelo menos 6 caracteres."));
    assert_eq!(validate_user(short, true), Err("A senha deve ter pelo menos 6 caracteres."));
}

#[test]
fn name_and_email_are_required() {
    assert_eq!(validate_user(UserDraft { name: " ".to_owned(), ..draft() }, false), Err("Informe o nome."));
    assert_eq!(
        validate_user(UserDraft { email: "carla".to_owned(), ..draft() }, false),
        Err("Informe um e-mail válido.")
    );
}

#[test]
fn draft_from_record_defaults_to_blank_password() {
    let record = UserRecord {
        id: "u-9".to_owned(),
        name: "Davi".to_owned(),
        email: "davi@firma.com".to_owned(),
        role: Role::Member,
    };
    let d = UserDraft::from(&record);
    assert!(d.password.is_empty());
    assert_eq!(d.role, Role::Member);
    assert_eq!(UserDraft::default().role, Role::Member);
}
