//! Display formatting for dates, money, and calendar pickers (pt-BR).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, UtcOffset};

/// Placeholder shown instead of values hidden by privacy mode.
pub const MASK: &str = "R$ ••••••";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Parse an ISO-8601 timestamp or plain `YYYY-MM-DD` into a UTC calendar date.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] when `raw` matches neither form.
pub fn parse_date(raw: &str) -> Result<Date, FormatError> {
    let trimmed = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(ts.to_offset(UtcOffset::UTC).date());
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map_err(|_| FormatError::InvalidDate(raw.to_owned()))
}

/// `dd/mm/yyyy` for an ISO date or timestamp, evaluated in UTC.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] for unparseable input.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let date = parse_date(raw)?;
    date.format(format_description!("[day]/[month]/[year]"))
        .map_err(|_| FormatError::InvalidDate(raw.to_owned()))
}

/// Table cell text for an optional date: `-` when absent or invalid.
pub fn format_date_cell(raw: Option<&str>) -> String {
    raw.and_then(|r| format_date(r).ok()).unwrap_or_else(|| "-".to_owned())
}

/// `YYYY-MM-DD`, the form the backend expects in payloads.
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Brazilian currency: `R$ 1.234,56`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0,00".to_owned();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// `formatted`, or [`MASK`] when `hidden`.
pub fn mask(formatted: String, hidden: bool) -> String {
    if hidden { MASK.to_owned() } else { formatted }
}

/// Parse a money input typed as `1.234,56`, `1234,56`, or `1234.56`.
pub fn parse_money_input(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().trim_start_matches("R$").chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.contains(',') { cleaned.replace('.', "").replace(',', ".") } else { cleaned };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Portuguese month name for `1..=12`; empty for anything else.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}

/// Years offered by the dashboard filter: two either side of `current`.
pub fn year_options(current: i32) -> Vec<i32> {
    (current - 2..=current + 2).collect()
}

/// Today's local date in the browser; UTC today elsewhere.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => Date::from_calendar_date(y, m, d).unwrap_or(Date::MIN),
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// `(month, year)` for the current period.
pub fn current_period() -> (u32, i32) {
    let date = today();
    (u32::from(u8::from(date.month())), date.year())
}

/// Validate a `(month, year)` pair picked in the filter.
pub fn valid_period(month: u32, year: i32) -> bool {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()).is_some() && (1900..=9999).contains(&year)
}
