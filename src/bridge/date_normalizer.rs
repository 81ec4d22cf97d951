//! Date string normalization.
//!
//! Source systems deliver dates either as ISO `YYYY-MM-DD` text or in
//! day-first form (`DD-MM-YYYY`). This module parses both with a fixed
//! precedence: ISO wins whenever it succeeds, and day-first is only tried
//! afterwards, so a string is never reinterpreted.

use chrono::{NaiveDate, NaiveDateTime};

/// Strict ISO date format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO timestamps some serializers emit for date-only columns.
const ISO_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Day-first formats, tried in order after ISO.
pub const DAY_FIRST_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Parses a date string, trying ISO first and day-first second.
///
/// Returns `None` when neither form matches. Never panics or errors on bad
/// input: an unparseable date is a null, not a failure.
///
/// # Example
///
/// ```
/// use rotation_bridge::bridge::normalize_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
/// assert_eq!(normalize_date("2024-01-15"), expected);
/// assert_eq!(normalize_date("15-01-2024"), expected);
/// assert_eq!(normalize_date("not a date"), None);
/// ```
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_iso(text).or_else(|| parse_day_first(text))
}

/// Parses a strict ISO date (four-digit year first), optionally followed by a
/// time component which is discarded.
pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    if !has_leading_year(text) {
        return None;
    }

    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT)
        .ok()
        .or_else(|| {
            ISO_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Parses a day-first date (`DD-MM-YYYY`, `DD/MM/YYYY` or `DD.MM.YYYY`).
///
/// The year must be exactly four digits; `15-01-24` is not a date.
pub fn parse_day_first(text: &str) -> Option<NaiveDate> {
    if !has_trailing_year(text) {
        return None;
    }

    DAY_FIRST_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

// chrono's %Y accepts any width; ISO here means exactly four digits then '-'.
fn has_leading_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 5 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

// Same width rule for day-first: a separator, then exactly four digits at the end.
fn has_trailing_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some(split) = bytes.len().checked_sub(4) else {
        return false;
    };
    split >= 1
        && matches!(bytes[split - 1], b'-' | b'/' | b'.')
        && bytes[split..].iter().all(u8::is_ascii_digit)
}
