//! Utility functions shared across the report engine

use chrono::NaiveDate;

use crate::error::{Result, RevenueError};

/// The date convention used by the booking front-end and report callers
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a report date in the DD-MM-YYYY convention
///
/// # Arguments
/// * `input` - The date string as received from the caller
///
/// # Returns
/// The parsed `NaiveDate`, or an error if the input does not match the
/// DD-MM-YYYY convention
///
/// # Errors
/// Returns `RevenueError::InvalidDate` when parsing fails
pub fn parse_report_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), REPORT_DATE_FORMAT).map_err(|source| {
        RevenueError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Format a date back into the DD-MM-YYYY convention for display
#[must_use]
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

/// Round a monetary value to 2 decimal places
///
/// All amounts are rounded before they are accumulated into bucket totals.
#[must_use]
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Strip the unit suffix from a stored age string ("45 Yrs" -> "45")
///
/// Ages are captured as free text at registration; reports carry only the
/// leading numeric part.
#[must_use]
pub fn strip_age_suffix(age: &str) -> String {
    age.trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect()
}

/// Reduce a stored gender string to the single-letter report code
///
/// Unrecognized values keep their first letter uppercased so the report
/// never shows an empty gender column for a populated field.
#[must_use]
pub fn gender_code(gender: &str) -> String {
    let trimmed = gender.trim();
    match trimmed.to_lowercase().as_str() {
        "male" | "m" => "M".to_string(),
        "female" | "f" => "F".to_string(),
        _ => trimmed
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default(),
    }
}
