//! Spanish (es-MX) date formatting.
//!
//! The checklist is printed in a single locale, so month names are fixed
//! here rather than pulled from a locale database.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Error, Result};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the string is not a valid calendar date.
pub fn parse_iso(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::invalid_date(value))
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Lowercase Spanish month name.
#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Long form, e.g. `18 de octubre de 2026`.
#[must_use]
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        month_name(date),
        date.year()
    )
}

/// Short form used in the PDF, e.g. `03-julio-2029`.
#[must_use]
pub fn format_short(date: NaiveDate) -> String {
    format!("{:02}-{}-{}", date.day(), month_name(date), date.year())
}
