//! Timestamp normalization for station samples
//!
//! Samples carry either `ts_local` (wall-clock time in the station's local
//! zone, no timezone marker) or `ts_utc` (UTC, with or without a trailing
//! `Z`). The same literal string could be parsed either way, so the two are
//! disambiguated purely by which field carried the value, never by
//! inspecting the string content.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::{CoreError, CoreResult};

/// Accepted date/time shapes. The upstream writes "YYYY-MM-DD HH:MM:SS";
/// some iterations of the feed swap the space for a `T`.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Produce the single comparable instant for a sample, or fail.
///
/// Preference order: `ts_local` if present, else `ts_utc`. A record with
/// neither field (or an unparseable value) is malformed and must be
/// dropped by the caller; there is no sentinel instant.
pub fn normalize_instant(ts_local: Option<&str>, ts_utc: Option<&str>) -> CoreResult<DateTime<Utc>> {
    if let Some(raw) = ts_local.filter(|s| !s.is_empty()) {
        return parse_local(raw);
    }
    if let Some(raw) = ts_utc.filter(|s| !s.is_empty()) {
        return parse_utc(raw);
    }
    Err(CoreError::MalformedTimestamp(
        "neither ts_local nor ts_utc present".to_string(),
    ))
}

/// Parse a wall-clock string in the system's local timezone.
///
/// Ambiguous wall-clock times (DST fall-back) resolve to the earliest
/// candidate; nonexistent times (spring-forward gap) are malformed.
pub fn parse_local(raw: &str) -> CoreResult<DateTime<Utc>> {
    let naive = parse_naive(raw)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::MalformedTimestamp(raw.to_string()))
}

/// Parse a UTC string. A missing `Z` marker is treated as if it were
/// present: the value is UTC because it arrived in the UTC field.
pub fn parse_utc(raw: &str) -> CoreResult<DateTime<Utc>> {
    let body = raw.strip_suffix('Z').unwrap_or(raw);
    parse_naive(body).map(|naive| naive.and_utc())
}

fn parse_naive(raw: &str) -> CoreResult<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| CoreError::MalformedTimestamp(raw.to_string()))
}
