//! Date bridge between the display form (`DD/MM/YYYY`) typed by users and
//! the transport form (`YYYY-MM-DD`) exchanged with the ERP backend, plus
//! Indonesian month and weekday names for printed documents.

use chrono::{Datelike, NaiveDate, Weekday};

use super::error::DateError;

/// Earliest year accepted by the parsers.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted by the parsers.
pub const MAX_YEAR: i32 = 2100;

/// Text some date pickers forward for unparseable input.
const INVALID_DATE_SENTINEL: &str = "Invalid Date";

static MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

static MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_transport_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `DD/MM/YYYY` date.
///
/// Each component must be a decimal integer; day 1–31, month 1–12,
/// year 1900–2100, and the result must be a real calendar day. Transport
/// form (`2024-02-29`) is rejected.
pub fn parse_display_date(input: &str) -> Result<NaiveDate, DateError> {
    split_three(input, '/')
        .and_then(|[day, month, year]| {
            checked_date(component(year)?, component(month)?, component(day)?)
        })
        .inspect_err(|err| tracing::debug!(input, error = %err, "rejected display date"))
}

/// Convert a `DD/MM/YYYY` date to `YYYY-MM-DD`.
///
/// Callers holding the legacy "empty string means no date" contract can use
/// `parse_date(s).unwrap_or_default()`.
///
/// ```
/// use faktur::parse_date;
///
/// assert_eq!(parse_date("05/01/2024").unwrap(), "2024-01-05");
/// assert!(parse_date("31/02/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<String, DateError> {
    parse_display_date(input).map(format_transport_date)
}

/// Parse a `YYYY-MM-DD` date with the same range and calendar checks as
/// [`parse_display_date`].
pub fn parse_transport_date(input: &str) -> Result<NaiveDate, DateError> {
    split_three(input, '-')
        .and_then(|[year, month, day]| {
            checked_date(component(year)?, component(month)?, component(day)?)
        })
        .inspect_err(|err| tracing::debug!(input, error = %err, "rejected transport date"))
}

/// Convert a `YYYY-MM-DD` date to `DD/MM/YYYY`.
pub fn transport_to_display(input: &str) -> Result<String, DateError> {
    parse_transport_date(input).map(format_date)
}

/// Full Indonesian month name for `month` in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Three-letter Indonesian month abbreviation for `month` in 1..=12.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    MONTH_ABBREV.get(month.checked_sub(1)? as usize).copied()
}

/// Indonesian weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Long form used in print footers, e.g. "05 Oktober 2026".
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Report cell text for a transport date.
///
/// Empty input prints as "-", a valid date as "15 Jun 2024", and anything
/// else is shown unchanged.
pub fn format_report_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "-".into();
    }
    match parse_transport_date(trimmed) {
        Ok(date) => format!(
            "{:02} {} {}",
            date.day(),
            MONTH_ABBREV[date.month0() as usize],
            date.year()
        ),
        Err(_) => input.to_string(),
    }
}

fn split_three(input: &str, sep: char) -> Result<[&str; 3], DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateError::Empty);
    }
    if input.eq_ignore_ascii_case(INVALID_DATE_SENTINEL) {
        return Err(DateError::Sentinel);
    }
    let mut parts = input.split(sep);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(DateError::Shape(input.to_string())),
    }
}

fn component(s: &str) -> Result<u32, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::NotANumber(s.to_string()));
    }
    s.parse().map_err(|_| DateError::NotANumber(s.to_string()))
}

fn checked_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    if !(1..=31).contains(&day) {
        return Err(DateError::OutOfRange { field: "day", value: day });
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::OutOfRange { field: "month", value: month });
    }
    if !(MIN_YEAR as u32..=MAX_YEAR as u32).contains(&year) {
        return Err(DateError::OutOfRange { field: "year", value: year });
    }
    let year = year as i32;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::NotACalendarDate { year, month, day })
}
