//! Capacity-bounded reading buffer

use crate::{WindowError, WindowResult};
use chrono::{DateTime, Utc};
use meteo_core::Reading;
use std::collections::VecDeque;

/// Ordered, capacity-bounded sequence of readings.
///
/// Created empty, populated exactly once by [`Window::bootstrap_load`]
/// (which fixes the capacity), then mutated only through the live merge
/// for the rest of the session. Instants are strictly increasing; the
/// merge path enforces that before anything reaches [`Window::append`].
#[derive(Debug, Default)]
pub struct Window {
    readings: VecDeque<Reading>,
    capacity: usize,
    last_accepted: Option<DateTime<Utc>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a historical load and fix `capacity` at
    /// its length. The history feed serves rows oldest-to-newest and is
    /// trusted to be ordered; no re-sort happens here.
    ///
    /// A re-run fully replaces prior state. An empty load leaves the
    /// window un-bootstrapped, so live merges stay rejected.
    pub fn bootstrap_load(&mut self, readings: Vec<Reading>) {
        self.last_accepted = readings.last().map(|r| r.instant);
        self.capacity = readings.len();
        self.readings = readings.into();
    }

    /// Tail append with FIFO eviction from the head. Callers go through
    /// [`Window::try_merge`], which has already checked ordering.
    pub(crate) fn append(&mut self, reading: Reading) -> WindowResult<()> {
        if self.capacity == 0 {
            return Err(WindowError::NotBootstrapped);
        }
        self.readings.push_back(reading);
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
        Ok(())
    }

    pub(crate) fn set_last_accepted(&mut self, instant: DateTime<Utc>) {
        self.last_accepted = Some(instant);
    }

    /// Instant of the most recently accepted reading.
    pub fn last_accepted(&self) -> Option<DateTime<Utc>> {
        self.last_accepted
    }

    /// Fixed at bootstrap; zero means bootstrap has not happened.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.capacity > 0
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Time-ordered view of the buffered readings.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_reading(minute: u32) -> Reading {
        Reading {
            instant: Utc
                .with_ymd_and_hms(2024, 6, 1, 10 + minute / 60, minute % 60, 0)
                .unwrap(),
            temperature_c: Some(20.0),
            rain_rate_mmph: 0.0,
        }
    }

    #[test]
    fn test_bootstrap_fixes_capacity_and_last_accepted() {
        let mut window = Window::new();
        assert!(!window.is_bootstrapped());

        window.bootstrap_load(vec![make_reading(0), make_reading(10), make_reading(20)]);

        assert_eq!(window.capacity(), 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.last_accepted(), Some(make_reading(20).instant));
    }

    #[test]
    fn test_empty_bootstrap_stays_unbootstrapped() {
        let mut window = Window::new();
        window.bootstrap_load(Vec::new());

        assert_eq!(window.capacity(), 0);
        assert!(!window.is_bootstrapped());
        assert_eq!(window.last_accepted(), None);
    }

    #[test]
    fn test_append_before_bootstrap_fails() {
        let mut window = Window::new();
        let err = window.append(make_reading(0)).unwrap_err();
        assert!(matches!(err, WindowError::NotBootstrapped));
        assert!(window.is_empty());
    }

    #[test]
    fn test_append_evicts_fifo() {
        let mut window = Window::new();
        window.bootstrap_load(vec![make_reading(0), make_reading(10), make_reading(20)]);

        window.append(make_reading(30)).unwrap();

        assert_eq!(window.len(), 3);
        let instants: Vec<_> = window.readings().map(|r| r.instant).collect();
        assert_eq!(
            instants,
            vec![
                make_reading(10).instant,
                make_reading(20).instant,
                make_reading(30).instant
            ]
        );
    }

    #[test]
    fn test_rebootstrap_replaces_state() {
        let mut window = Window::new();
        window.bootstrap_load(vec![make_reading(0), make_reading(10)]);
        window.bootstrap_load(vec![make_reading(30), make_reading(40), make_reading(50)]);

        assert_eq!(window.capacity(), 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.last_accepted(), Some(make_reading(50).instant));
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut window = Window::new();
        let history: Vec<_> = (0..144).map(make_reading).collect();
        window.bootstrap_load(history);
        assert_eq!(window.capacity(), 144);

        for i in 0..10 {
            window.append(make_reading(144 + i)).unwrap();
            assert!(window.len() <= window.capacity());
        }

        assert_eq!(window.len(), 144);
        // The 10 oldest historical samples were evicted, in order.
        let first = window.readings().next().unwrap();
        assert_eq!(first.instant, make_reading(10).instant);
    }
}
