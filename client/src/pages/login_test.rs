use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@firma.com ", "segredo"),
        Ok(LoginCredentials { email: "ana@firma.com".to_owned(), password: "segredo".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "segredo"), Err("Informe e-mail e senha."));
    assert_eq!(validate_login_input("ana@firma.com", ""), Err("Informe e-mail e senha."));
    assert_eq!(validate_login_input("   ", "x"), Err("Informe e-mail e senha."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ana", "segredo"), Err("Informe um e-mail válido."));
}

#[test]
fn rejected_login_reads_as_invalid_credentials() {
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(login_error_message(&err), "Credenciais inválidas");
    let err = ApiError::Status { status: 400, message: "senha incorreta".to_owned() };
    assert_eq!(login_error_message(&err), "Credenciais inválidas");
}

#[test]
fn transport_failure_is_not_reported_as_bad_credentials() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(login_error_message(&err), "Não foi possível conectar ao servidor.");
    let err = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(login_error_message(&err), "Erro 500 ao processar a requisição.");
}
