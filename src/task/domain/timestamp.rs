//! Timestamp helpers shared by the service layer and storage adapters.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mockable::Clock;

/// Returns the current clock time truncated to the precision stored on tasks.
#[must_use]
pub fn now(clock: &(impl Clock + ?Sized)) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}

/// Renders a timestamp as fixed-width RFC 3339 text (`...T03:04:05.000006Z`).
///
/// The fixed width keeps lexicographic and chronological order identical.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Offset-free ISO 8601 form; such values are read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a stored timestamp back into UTC.
///
/// Accepts RFC 3339 text and offset-free ISO 8601 text
/// (`2026-01-01T00:00:00.000000`), which is taken to be UTC.
///
/// # Errors
///
/// Returns the underlying [`chrono::ParseError`] when the text matches
/// neither form.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).map(|naive| naive.and_utc()))
}
