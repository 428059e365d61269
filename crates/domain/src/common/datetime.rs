//! Calendar date parsing and display.

use chrono::{DateTime, NaiveDate};

use crate::error::DomainError;

/// Parses an event date.
///
/// Accepts a plain calendar date (`YYYY-MM-DD`, what an HTML date input
/// produces) or an RFC3339 timestamp, in which case the date part as written
/// is kept.
///
/// # Examples
///
/// ```
/// use clubroster_domain::common::parse_event_date;
/// use chrono::Datelike;
///
/// let date = parse_event_date("2025-09-10").unwrap();
/// assert_eq!(date.day(), 10);
/// assert!(parse_event_date("2025-02-30").is_err());
/// ```
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` carrying the input when neither form parses.
pub fn parse_event_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| DomainError::invalid_date(input))
}

/// Formats a date with a day-granularity hint relative to `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clubroster_domain::common::friendly_when;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
/// assert_eq!(friendly_when(date, today), "Sep 10, 2025 (in 12 days)");
/// ```
pub fn friendly_when(date: NaiveDate, today: NaiveDate) -> String {
    let days = date.signed_duration_since(today).num_days();
    let relative = match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        n if n > 1 => format!("in {n} days"),
        n => format!("{} days ago", -n),
    };
    format!("{} ({relative})", date.format("%b %-d, %Y"))
}
