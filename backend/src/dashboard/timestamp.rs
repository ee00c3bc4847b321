//! Display formatting for the dataset's `updatedAt` timestamp.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// `Mon Jan 15 2018 10:30:00 GMT+0530`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse an RFC 3339 timestamp, or a naive `YYYY-MM-DD HH:MM:SS` /
/// `YYYY-MM-DDTHH:MM:SS` timestamp read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Format `raw` in `tz`. Unparseable input is returned unchanged.
pub fn format_updated_at<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
