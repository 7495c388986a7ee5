//! Date and time utility functions
//!
//! The feed carries timestamps as ISO-8601 strings; this module parses them
//! for sorting and formats them for display ("March 3, 2024").

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Display format used for article dates: long month name, day, year
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Parse a feed timestamp into a concrete point in time.
///
/// Accepts RFC 3339 ("2024-03-03T12:00:00Z"), a bare datetime without
/// offset, or a bare date (interpreted as midnight UTC). Returns `None` for
/// anything else; callers decide how unparseable timestamps behave.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().fixed_offset());
    }

    None
}

/// Format a feed timestamp for display using the given strftime format.
///
/// Unparseable timestamps fall back to the raw string rather than erroring;
/// the feed is not validated on this axis.
pub fn format_display_date(raw: &str, format: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&Utc).format(format).to_string(),
        None => raw.to_string(),
    }
}
