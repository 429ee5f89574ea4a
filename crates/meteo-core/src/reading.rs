//! Validated sensor readings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plausibility domain for temperature (°C). Values outside are sensor
/// garbage and become an explicit gap, not a clipped value.
pub const TEMP_PLAUSIBLE_MIN_C: f64 = -10.0;
pub const TEMP_PLAUSIBLE_MAX_C: f64 = 55.0;

/// Display domain for temperature (°C); bounds the chart axis. Applied
/// only when a snapshot is produced, never during validation.
pub const TEMP_DISPLAY_MIN_C: f64 = 0.0;
pub const TEMP_DISPLAY_MAX_C: f64 = 43.0;

/// One validated sample from the station.
///
/// `instant` is the sole ordering and deduplication key. A `None`
/// temperature means "unknown"; a missing rain rate is "no rain" and
/// normalizes to zero during validation, so it is never optional here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub instant: DateTime<Utc>,
    pub temperature_c: Option<f64>,
    pub rain_rate_mmph: f64,
}

impl Reading {
    /// Temperature clamped into the display domain. Gaps stay gaps.
    pub fn display_temperature_c(&self) -> Option<f64> {
        self.temperature_c
            .map(|t| t.clamp(TEMP_DISPLAY_MIN_C, TEMP_DISPLAY_MAX_C))
    }
}
