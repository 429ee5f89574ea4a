//! Validation boundary from raw payloads to readings
//!
//! Field coercion rules:
//! - temperature: non-finite or outside the plausibility domain becomes
//!   `None` (an explicit gap), never a clipped value. The narrower
//!   display clamp happens later, at snapshot time.
//! - rain rate: non-finite or missing becomes 0.0, negatives floor to
//!   0.0. Rain never produces gaps.
//! - timestamp: normalization failure rejects the whole record.

use crate::payload::{FieldValue, RawSample};
use crate::reading::{Reading, TEMP_PLAUSIBLE_MAX_C, TEMP_PLAUSIBLE_MIN_C};
use crate::timestamp::normalize_instant;
use crate::CoreResult;

/// Coerced temperature: present, finite, and physically plausible, else a
/// gap. No clamping here.
pub fn validate_temperature(value: &FieldValue) -> Option<f64> {
    value
        .as_f64()
        .filter(|t| t.is_finite())
        .filter(|t| (TEMP_PLAUSIBLE_MIN_C..=TEMP_PLAUSIBLE_MAX_C).contains(t))
}

/// Coerced rain rate: missing or garbage means "no rain", not "unknown".
pub fn validate_rain_rate(value: &FieldValue) -> f64 {
    value
        .as_f64()
        .filter(|r| r.is_finite())
        .map(|r| r.max(0.0))
        .unwrap_or(0.0)
}

/// Convert a raw sample into a [`Reading`], or reject the record when its
/// timestamp cannot be normalized.
pub fn validate_sample(sample: &RawSample) -> CoreResult<Reading> {
    let instant = normalize_instant(sample.ts_local.as_deref(), sample.ts_utc.as_deref())?;
    Ok(Reading {
        instant,
        temperature_c: validate_temperature(&sample.temp_c),
        rain_rate_mmph: validate_rain_rate(&sample.rain_rate_mmph),
    })
}
