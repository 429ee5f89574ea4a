//! Bootstrap and live poll loop
//!
//! The poller owns the window: one logical task drives bootstrap and then
//! the recurring live poll. Each cycle (fetch, validate, merge, publish)
//! is awaited to completion before the next tick is considered, so merges
//! never overlap and the window needs no lock.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use meteo_client::Feed;
use meteo_core::{validate_sample, LiveConditions};
use meteo_window::{Freshness, MergeOutcome, SnapshotSink, StationStatus, Window};

pub struct Poller {
    feed: Box<dyn Feed>,
    sink: Box<dyn SnapshotSink>,
    window: Window,
    /// Most recent live payload; feeds the current-conditions panel.
    conditions: Option<LiveConditions>,
    poll_interval: Duration,
    history_hours: u32,
}

impl Poller {
    pub fn new(
        feed: Box<dyn Feed>,
        sink: Box<dyn SnapshotSink>,
        poll_interval: Duration,
        history_hours: u32,
    ) -> Self {
        Self {
            feed,
            sink,
            window: Window::new(),
            conditions: None,
            poll_interval,
            history_hours,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// One-time bootstrap: fetch the trailing history, validate it, load
    /// the window, and publish the initial snapshot.
    ///
    /// Individual malformed rows are dropped with a warning; a failed
    /// fetch is fatal, since there is no window to fall back to.
    pub async fn bootstrap(&mut self) -> Result<()> {
        let rows = self
            .feed
            .fetch_history(self.history_hours)
            .await
            .context("History fetch failed")?;

        let total = rows.len();
        let mut readings = Vec::with_capacity(total);
        for row in &rows {
            match validate_sample(row) {
                Ok(reading) => readings.push(reading),
                Err(e) => warn!(error = %e, "Dropping malformed history sample"),
            }
        }

        info!(
            loaded = readings.len(),
            dropped = total - readings.len(),
            "History bootstrap complete"
        );

        self.window.bootstrap_load(readings);
        self.publish(Freshness::Online).await
    }

    /// Run the recurring live poll. No error terminates the schedule: a
    /// failed cycle logs, republishes the previous window as stale, and
    /// the next tick still happens.
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = interval(self.poll_interval);
        // A slow cycle must not cause a burst of catch-up polls.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; bootstrap already published.
        ticker.tick().await;

        info!(interval_secs = self.poll_interval.as_secs(), "Poll loop started");

        loop {
            ticker.tick().await;
            if let Err(e) = self.poll_once().await {
                error!(error = %e, "Live poll failed; keeping previous window");
                if let Err(e) = self.publish(Freshness::Stale).await {
                    error!(error = %e, "Snapshot publish failed");
                }
            }
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let live = self.feed.fetch_live().await.context("Live fetch failed")?;
        self.merge_live(&live).await
    }

    /// Validate and merge one live payload, then republish with the full
    /// current-conditions surface.
    ///
    /// A malformed sample is dropped, not an error: the previous window
    /// is still published and the loop keeps its cadence. The payload's
    /// presentation fields are retained either way.
    pub(crate) async fn merge_live(&mut self, live: &LiveConditions) -> Result<()> {
        let freshness = if live.stale {
            Freshness::Stale
        } else {
            Freshness::Online
        };

        match validate_sample(&live.sample) {
            Ok(reading) => match self.window.try_merge(reading) {
                MergeOutcome::Accepted => {
                    debug!(instant = %reading.instant, "Live reading merged")
                }
                MergeOutcome::Stale => {
                    debug!(instant = %reading.instant, "Reading at or before last accepted; ignored")
                }
                MergeOutcome::NotBootstrapped => {
                    warn!("Live reading arrived before bootstrap; ignored")
                }
            },
            Err(e) => warn!(error = %e, "Dropping malformed live sample"),
        }

        self.conditions = Some(live.clone());
        self.publish(freshness).await
    }

    async fn publish(&mut self, freshness: Freshness) -> Result<()> {
        let status = StationStatus {
            freshness,
            age_s: self.conditions.as_ref().and_then(|c| c.age_s),
        };
        let snapshot = self.window.snapshot();
        self.sink
            .publish(&snapshot, self.conditions.as_ref(), &status)
            .await
    }
}
