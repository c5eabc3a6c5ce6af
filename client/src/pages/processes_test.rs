use super::*;
use api::types::Lawyer;

fn input() -> ProcessInput {
    ProcessInput {
        number: " 0001234-56.2024.8.26.0100 ".to_owned(),
        type_id: "t-1".to_owned(),
        lawyer_id: "u-2".to_owned(),
        office_id: "esc-1".to_owned(),
        customer_id: "c-1".to_owned(),
        description: " Ação de cobrança ".to_owned(),
        claim_value: 0.0,
        participation: 0.0,
        status: ProcessStatus::InProgress,
        started_on: "2024-03-01".to_owned(),
        closed_on: Some("2024-04-01".to_owned()),
    }
}

fn numbers(claim: &str, participation: &str) -> NumericDraft {
    NumericDraft { claim_value: claim.to_owned(), participation: participation.to_owned() }
}

// =============================================================
// validate_process
// =============================================================

#[test]
fn validate_process_parses_numbers_and_trims() {
    let valid = validate_process(input(), &numbers("15.000,50", "40")).unwrap();
    assert_eq!(valid.number, "0001234-56.2024.8.26.0100");
    assert_eq!(valid.description, "Ação de cobrança");
    assert!((valid.claim_value - 15_000.5).abs() < f64::EPSILON);
    assert!((valid.participation - 40.0).abs() < f64::EPSILON);
}

#[test]
fn in_progress_process_drops_closing_date() {
    let valid = validate_process(input(), &numbers("100", "100")).unwrap();
    assert_eq!(valid.closed_on, None);
}

#[test]
fn closed_process_requires_ordered_closing_date() {
    let closed = ProcessInput { status: ProcessStatus::Closed, ..input() };
    let valid = validate_process(closed.clone(), &numbers("100", "100")).unwrap();
    assert_eq!(valid.closed_on.as_deref(), Some("2024-04-01"));

    let missing = ProcessInput { closed_on: Some(String::new()), ..closed.clone() };
    assert_eq!(validate_process(missing, &numbers("100", "100")), Err("Informe a data de encerramento."));

    let backwards = ProcessInput { closed_on: Some("2024-02-01".to_owned()), ..closed };
    assert_eq!(
        validate_process(backwards, &numbers("100", "100")),
        Err("O encerramento não pode ser anterior ao início.")
    );
}

#[test]
fn validate_process_requires_every_reference() {
    let cases = [
        (ProcessInput { number: "  ".to_owned(), ..input() }, "Informe o número do processo."),
        (ProcessInput { type_id: String::new(), ..input() }, "Selecione o tipo do processo."),
        (ProcessInput { customer_id: String::new(), ..input() }, "Selecione o cliente."),
        (ProcessInput { lawyer_id: String::new(), ..input() }, "Selecione o advogado responsável."),
        (ProcessInput { office_id: String::new(), ..input() }, "Selecione o escritório."),
        (ProcessInput { started_on: String::new(), ..input() }, "Informe a data de início."),
    ];
    for (candidate, expected) in cases {
        assert_eq!(validate_process(candidate, &numbers("1", "1")), Err(expected));
    }
}

#[test]
fn validate_process_rejects_bad_numbers() {
    assert_eq!(validate_process(input(), &numbers("abc", "10")), Err("Informe um valor da causa válido."));
    assert_eq!(validate_process(input(), &numbers("-5", "10")), Err("Informe um valor da causa válido."));
    assert_eq!(
        validate_process(input(), &numbers("10", "120")),
        Err("A participação deve estar entre 0 e 100%.")
    );
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn numeric_draft_uses_decimal_comma_for_claim_value() {
    let draft = NumericDraft::from_input(&ProcessInput { claim_value: 1500.0, participation: 50.0, ..input() });
    assert_eq!(draft.claim_value, "1500,00");
    assert_eq!(draft.participation, "50");
}

#[test]
fn lawyer_names_joins_or_dashes() {
    let mut process: Process = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "numero": "123",
    }))
    .unwrap();
    assert_eq!(lawyer_names(&process), "-");
    process.lawyers = vec![
        Lawyer { id: "u-1".to_owned(), name: "Ana".to_owned(), participation: Some(60.0) },
        Lawyer { id: "u-2".to_owned(), name: "Bruno".to_owned(), participation: None },
    ];
    assert_eq!(lawyer_names(&process), "Ana, Bruno");
}
