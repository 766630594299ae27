//! Date normalization for free-form client input.
//!
//! Clients send dates as millisecond epoch strings, calendar date strings,
//! or not at all. Everything funnels through [`normalize`], which always
//! produces a valid calendar date: unparseable input falls back to today
//! rather than failing the request.

use chrono::{DateTime, NaiveDate, Utc};

/// Normalize an optional free-form date string to a calendar date (UTC).
///
/// - absent or blank input → today
/// - all-digit input → millisecond epoch timestamp
/// - otherwise → `yyyy-mm-dd`, then RFC 3339, as date strings
/// - anything unparseable (including epoch zero) → today
///
/// This function cannot fail.
pub fn normalize(input: Option<&str>) -> NaiveDate {
    let today = Utc::now().date_naive();

    let raw = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return today,
    };

    if raw.chars().all(|c| c.is_ascii_digit()) {
        // Millisecond epoch timestamp. Zero is the "invalid date" sentinel.
        return raw
            .parse::<i64>()
            .ok()
            .filter(|ms| *ms != 0)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive())
            .unwrap_or(today);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).date_naive();
    }

    today
}

/// Render a date in the human-readable form used in response payloads,
/// e.g. "Mon Jan 01 2024".
pub fn human(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
