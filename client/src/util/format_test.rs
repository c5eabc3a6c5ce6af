use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_accepts_plain_dates() {
    assert_eq!(format_date("2024-03-07"), Ok("07/03/2024".to_owned()));
}

#[test]
fn format_date_uses_utc_for_timestamps() {
    assert_eq!(format_date("2024-03-07T00:00:00.000Z"), Ok("07/03/2024".to_owned()));
    assert_eq!(format_date("2024-03-06T23:30:00-03:00"), Ok("07/03/2024".to_owned()));
}

#[test]
fn format_date_rejects_garbage() {
    assert_eq!(format_date("ontem"), Err(FormatError::InvalidDate("ontem".to_owned())));
    assert!(format_date("2024-13-01").is_err());
    assert!(format_date("").is_err());
}

#[test]
fn format_date_cell_falls_back_to_dash() {
    assert_eq!(format_date_cell(None), "-");
    assert_eq!(format_date_cell(Some("invalid")), "-");
    assert_eq!(format_date_cell(Some("2023-12-31")), "31/12/2023");
}

#[test]
fn iso_date_zero_pads() {
    let date = Date::from_calendar_date(2024, Month::February, 5).unwrap();
    assert_eq!(iso_date(date), "2024-02-05");
}

// =============================================================
// Money
// =============================================================

#[test]
fn format_brl_groups_thousands_with_dots() {
    assert_eq!(format_brl(1234.56), "R$ 1.234,56");
    assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
    assert_eq!(format_brl(999.0), "R$ 999,00");
}

#[test]
fn format_brl_rounds_to_cents() {
    assert_eq!(format_brl(0.005), "R$ 0,01");
    assert_eq!(format_brl(10.499), "R$ 10,50");
}

#[test]
fn format_brl_handles_negative_and_non_finite() {
    assert_eq!(format_brl(-12.5), "-R$ 12,50");
    assert_eq!(format_brl(-0.001), "R$ 0,00");
    assert_eq!(format_brl(f64::NAN), "R$ 0,00");
}

#[test]
fn mask_hides_only_when_requested() {
    assert_eq!(mask("R$ 1,00".to_owned(), false), "R$ 1,00");
    assert_eq!(mask("R$ 1,00".to_owned(), true), MASK);
}

#[test]
fn parse_money_input_accepts_both_separators() {
    assert_eq!(parse_money_input("1.234,56"), Some(1234.56));
    assert_eq!(parse_money_input("R$ 99,90"), Some(99.9));
    assert_eq!(parse_money_input("1500.5"), Some(1500.5));
    assert_eq!(parse_money_input("  "), None);
    assert_eq!(parse_money_input("abc"), None);
}

// =============================================================
// Calendar
// =============================================================

#[test]
fn month_name_is_portuguese() {
    assert_eq!(month_name(1), "Janeiro");
    assert_eq!(month_name(3), "Março");
    assert_eq!(month_name(12), "Dezembro");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}

#[test]
fn year_options_span_two_years_each_side() {
    assert_eq!(year_options(2024), vec![2022, 2023, 2024, 2025, 2026]);
}

#[test]
fn current_period_is_valid() {
    let (month, year) = current_period();
    assert!(valid_period(month, year));
}

#[test]
fn valid_period_rejects_out_of_range_months() {
    assert!(!valid_period(0, 2024));
    assert!(!valid_period(13, 2024));
    assert!(valid_period(12, 2024));
}
