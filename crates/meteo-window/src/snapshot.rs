//! Render-ready snapshot of the window

use crate::{rain_total_mm, Window};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Immutable view handed to the rendering adapter.
///
/// The three series are index-aligned. A `None` temperature is an
/// explicit gap the consumer must not interpolate across; the rain series
/// never contains gaps. Temperatures are already clamped to the display
/// domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSnapshot {
    /// Local clock-time labels, "HH:MM".
    pub labels: Vec<String>,
    pub temperature_c: Vec<Option<f64>>,
    pub rain_rate_mmph: Vec<f64>,
    /// Rolling rainfall total over the window, in mm.
    pub rain_total_mm: f64,
}

impl Window {
    /// Produce the current render view. Side-effect free; safe to call
    /// any number of times.
    pub fn snapshot(&self) -> WindowSnapshot {
        let mut labels = Vec::with_capacity(self.len());
        let mut temperature_c = Vec::with_capacity(self.len());
        let mut rain_rate_mmph = Vec::with_capacity(self.len());

        for reading in self.readings() {
            labels.push(
                reading
                    .instant
                    .with_timezone(&Local)
                    .format("%H:%M")
                    .to_string(),
            );
            temperature_c.push(reading.display_temperature_c());
            rain_rate_mmph.push(reading.rain_rate_mmph);
        }

        WindowSnapshot {
            labels,
            temperature_c,
            rain_rate_mmph,
            rain_total_mm: rain_total_mm(self),
        }
    }
}
