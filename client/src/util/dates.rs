//! Clock access and timestamp formatting.
//!
//! Wall-clock time comes from `Date.now()` in the browser and `SystemTime`
//! during SSR; everything else works on explicit millisecond values so it
//! stays testable.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Milliseconds in one day.
pub const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Parse an ISO 8601 timestamp into epoch milliseconds.
///
/// Accepts RFC 3339 (`Z` or numeric offset) and offset-less timestamps,
/// which are read as UTC.
pub fn parse_timestamp_ms(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).ok().or_else(|| {
        let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
        PrimitiveDateTime::parse(raw, naive).ok().map(PrimitiveDateTime::assume_utc)
    })?;
    #[allow(clippy::cast_precision_loss)]
    let ms = (parsed.unix_timestamp_nanos() / 1_000_000) as f64;
    Some(ms)
}

fn datetime_from_ms(ms: f64) -> Option<OffsetDateTime> {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (ms * 1_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

/// RFC 3339 timestamp for epoch milliseconds.
pub fn iso_timestamp(ms: f64) -> String {
    datetime_from_ms(ms)
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_default()
}

/// `YYYY-MM-DD` for epoch milliseconds.
pub fn iso_date(ms: f64) -> String {
    datetime_from_ms(ms)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}

/// Short calendar date (`M/D/YYYY`) for display; falls back to the raw input.
pub fn display_date(raw: &str) -> String {
    parse_timestamp_ms(raw)
        .and_then(datetime_from_ms)
        .and_then(|dt| {
            dt.format(format_description!("[month padding:none]/[day padding:none]/[year]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}

/// Calendar year for epoch milliseconds.
pub fn year(ms: f64) -> i32 {
    datetime_from_ms(ms).map_or(1970, OffsetDateTime::year)
}
