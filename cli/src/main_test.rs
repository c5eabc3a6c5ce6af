use super::*;
use session::{MemoryStorage, User};

fn user(role: Role) -> User {
    User { id: "u-1".to_owned(), email: "ana@firma.com".to_owned(), role, name: Some("Ana".to_owned()) }
}

fn context(role: Option<Role>) -> (AuthContext<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let mut auth = AuthContext::new(storage.clone(), Credentials::new());
    auth.initialize("/");
    if let Some(role) = role {
        auth.login("tok", user(role)).unwrap();
    }
    (auth, storage)
}

// =============================================================
// require
// =============================================================

#[test]
fn require_rejects_anonymous_run() {
    let (mut auth, _) = context(None);
    assert!(matches!(require(&mut auth, None), Err(CliError::NotLoggedIn)));
}

#[test]
fn require_accepts_any_logged_in_user_without_role() {
    let (mut auth, _) = context(Some(Role::Member));
    assert!(require(&mut auth, None).is_ok());
}

#[test]
fn require_maps_role_mismatch_to_forbidden() {
    let (mut auth, storage) = context(Some(Role::Member));
    assert!(matches!(require(&mut auth, Some(Role::Admin)), Err(CliError::Forbidden)));
    // A role mismatch keeps the session.
    assert!(!storage.is_empty());
    assert!(auth.user().is_some());
}

#[test]
fn require_admin_passes_for_admin() {
    let (mut auth, _) = context(Some(Role::Admin));
    assert!(require(&mut auth, Some(Role::Admin)).is_ok());
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn parse_date_accepts_iso_day() {
    assert_eq!(parse_date(Some(" 2024-05-10 ")).unwrap(), "2024-05-10");
}

#[test]
fn parse_date_rejects_other_layouts() {
    assert!(matches!(parse_date(Some("10/05/2024")), Err(CliError::InvalidDate(raw)) if raw == "10/05/2024"));
    assert!(matches!(parse_date(Some("2024-02-30")), Err(CliError::InvalidDate(_))));
}

#[test]
fn parse_date_defaults_to_today() {
    let today = parse_date(None).unwrap();
    assert_eq!(today.len(), 10);
    assert_eq!(&today[4..5], "-");
}

#[test]
fn cli_parses_nested_record_commands() {
    let cli = Cli::try_parse_from(["backoffice", "customers", "list", "--page", "3"]).unwrap();
    match cli.command {
        Command::Customers(CustomersCommand { command: RecordSubcommand::List(args) }) => {
            assert_eq!(args.page, 3);
            assert_eq!(args.limit, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_parses_pay_installment_with_date() {
    let cli =
        Cli::try_parse_from(["backoffice", "fees", "pay-installment", "i-9", "--date", "2024-05-10"]).unwrap();
    match cli.command {
        Command::Fees(FeesCommand { command: FeesSubcommand::PayInstallment { installment_id, date } }) => {
            assert_eq!(installment_id, "i-9");
            assert_eq!(date.as_deref(), Some("2024-05-10"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["backoffice"]).is_err());
}

#[test]
fn http_method_covers_every_verb() {
    assert_eq!(http_method(api::Method::Get), reqwest::Method::GET);
    assert_eq!(http_method(api::Method::Post), reqwest::Method::POST);
    assert_eq!(http_method(api::Method::Patch), reqwest::Method::PATCH);
    assert_eq!(http_method(api::Method::Delete), reqwest::Method::DELETE);
}
