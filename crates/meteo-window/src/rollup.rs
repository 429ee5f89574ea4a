//! Rolling rainfall total

use crate::Window;

/// Nominal sampling interval of the history feed, as a fraction of an
/// hour (10-minute samples).
pub const SAMPLE_INTERVAL_HOURS: f64 = 1.0 / 6.0;

/// Cumulative rainfall over the buffered window, in mm.
///
/// Every sample is assumed to cover the nominal interval, so the total
/// spans "capacity samples at 10 minutes each", not a wall-clock-anchored
/// 24 hours. Gaps in the feed make it under-count true elapsed-time
/// rainfall; known approximation.
///
/// Recomputed from scratch on every call; the window holds on the order
/// of 150 samples.
pub fn rain_total_mm(window: &Window) -> f64 {
    window
        .readings()
        .map(|r| r.rain_rate_mmph * SAMPLE_INTERVAL_HOURS)
        .sum()
}
