//! Timestamps
//!
//! Tasks carry RFC 3339 strings; the UI shows them in local time.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Current time as stored on tasks, e.g. `2024-03-05T14:07:09.123Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whether chrono accepts every specifier in `format`
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Render a stored timestamp in local time; unparsable input is shown as-is
pub fn format_timestamp(raw: &str, format: &str) -> String {
    format_timestamp_in(raw, format, &Local)
}

/// As [`format_timestamp`] in an explicit zone; a pattern chrono cannot
/// render also yields the raw input
pub fn format_timestamp_in<Tz>(raw: &str, format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => {
            let mut shown = String::new();
            match write!(shown, "{}", parsed.with_timezone(tz).format(format)) {
                Ok(()) => shown,
                Err(_) => raw.to_string(),
            }
        }
        Err(_) => raw.to_string(),
    }
}
