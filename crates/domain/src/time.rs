//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// UTC timestamp parsed out of a record's `creationTime`.
pub type Timestamp = DateTime<Utc>;

/// Naive layouts accepted after RFC 3339. All are interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a stored date string.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`, with any offset), a naive
/// date-time with `T` or space separator (`2024-03-01T10:00:00.250`), or a
/// bare date (`2024-03-01`, midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a stored date string down to epoch milliseconds.
#[must_use]
pub fn parse_epoch_millis(raw: &str) -> Option<i64> {
    parse_timestamp(raw).map(|ts| ts.timestamp_millis())
}
