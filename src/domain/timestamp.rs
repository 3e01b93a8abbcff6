//! Timestamp conventions of the notes store.
//!
//! The store records dates as signed seconds since 2001-01-01T00:00:00Z, the
//! platform reference date. The read path converts them to local wall-clock
//! strings in SQL and parses those strings here.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Seconds between the Unix epoch and the store's reference date.
pub const REFERENCE_EPOCH_OFFSET: i64 = 978_307_200;

/// Format of the local-time strings produced by SQLite's `datetime()`.
pub const STORE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a `YYYY-MM-DD HH:MM:SS` local-time string.
///
/// Empty or malformed input yields `None` instead of an error; one bad date
/// must not hide the rest of a listing.
pub fn parse_store_datetime(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, STORE_DATETIME_FORMAT).ok()
}

/// Converts a raw store value to a UTC instant.
pub fn from_store_seconds(raw: f64) -> Option<DateTime<Utc>> {
    let secs = raw.floor();
    let nanos = ((raw - secs) * 1e9).round() as u32;
    DateTime::from_timestamp(secs as i64 + REFERENCE_EPOCH_OFFSET, nanos.min(999_999_999))
}

/// Converts a raw store value to local wall-clock time, as listings show it.
pub fn store_seconds_to_local(raw: f64) -> Option<NaiveDateTime> {
    from_store_seconds(raw).map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Converts a UTC instant to the store's raw representation.
pub fn to_store_seconds(dt: DateTime<Utc>) -> f64 {
    (dt.timestamp() - REFERENCE_EPOCH_OFFSET) as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9
}
