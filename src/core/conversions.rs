//! Timestamp conversions between the wire format and `chrono` values.
//!
//! The Point Forecast API speaks ISO-8601 throughout: request bodies encode
//! timestamps as RFC 3339 strings and responses return them the same way.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::error::MetOceanError;

/// Formats a timestamp the way the API expects it, e.g. `2024-01-01T00:00:00Z`.
pub(crate) fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a response timestamp, failing with a decode error naming the
/// offending string.
pub(crate) fn parse_utc(s: &str) -> Result<DateTime<Utc>, MetOceanError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| MetOceanError::Data(format!("unparsable timestamp \"{s}\": {e}")))
}
