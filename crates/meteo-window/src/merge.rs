//! Live merge policy
//!
//! The single decision point for whether an incoming live reading counts
//! as new data. Accepted readings form a strictly increasing sequence of
//! instants; ties are rejected rather than overwritten because the
//! upstream never republishes a corrected value for an instant it has
//! already served.

use crate::Window;
use meteo_core::Reading;

/// Outcome of a live merge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Appended; the window advanced.
    Accepted,
    /// Instant at or before the last accepted reading. Duplicate delivery
    /// and out-of-order arrival both land here; a normal filtering
    /// outcome, not an error.
    Stale,
    /// Bootstrap has not completed; nothing may be appended yet.
    NotBootstrapped,
}

impl MergeOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MergeOutcome::Accepted)
    }
}

impl Window {
    /// Append `reading` if it is strictly newer than everything accepted
    /// so far. Idempotent under duplicate delivery; a no-op on the buffer
    /// in every non-accepting case.
    pub fn try_merge(&mut self, reading: Reading) -> MergeOutcome {
        if !self.is_bootstrapped() {
            return MergeOutcome::NotBootstrapped;
        }

        if let Some(last) = self.last_accepted() {
            if reading.instant <= last {
                return MergeOutcome::Stale;
            }
        }

        let instant = reading.instant;
        match self.append(reading) {
            Ok(()) => {
                self.set_last_accepted(instant);
                MergeOutcome::Accepted
            }
            Err(_) => MergeOutcome::NotBootstrapped,
        }
    }
}
