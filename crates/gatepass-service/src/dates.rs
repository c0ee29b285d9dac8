//! Date parsing, validation, and formatting for pass validity windows.
//!
//! Form dates arrive as text. Plain `YYYY-MM-DD` values are interpreted
//! as midnight UTC; full RFC 3339 timestamps are accepted as a fallback
//! so round-tripped values parse too.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use gatepass_core::error::AppError;

/// Parses a form date string into a UTC instant.
///
/// Returns `None` when the input matches neither `YYYY-MM-DD` nor
/// RFC 3339.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses and validates a start/end date pair.
///
/// Both dates must parse, and the end must not come before the start.
/// Equal dates describe a one-day pass and are allowed.
pub fn validate_date_range(
    start: &str,
    end: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let Some(start) = parse_date(start) else {
        return Err(AppError::invalid_date("Please enter valid dates"));
    };
    let Some(end) = parse_date(end) else {
        return Err(AppError::invalid_date("Please enter valid dates"));
    };

    if end < start {
        return Err(AppError::invalid_range(
            "The end date cannot be earlier than the start date",
        ));
    }

    Ok((start, end))
}

/// Formats an instant as a calendar date, `YYYY-MM-DD`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an instant as a full ISO 8601 timestamp with millisecond
/// precision, e.g. `2024-03-01T00:00:00.000Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
