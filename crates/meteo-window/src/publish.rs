//! Publication boundary to the rendering adapter

use crate::WindowSnapshot;
use anyhow::Result;
use meteo_core::LiveConditions;
use serde::{Deserialize, Serialize};

/// Presentation freshness. Does not affect window contents: a failed
/// fetch still republishes the previous snapshot, just marked stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Online,
    Stale,
}

/// Status published alongside the snapshot: freshness plus the upstream
/// report age, when the feed supplies one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationStatus {
    pub freshness: Freshness,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_s: Option<f64>,
}

impl StationStatus {
    pub fn is_stale(&self) -> bool {
        self.freshness == Freshness::Stale
    }
}

/// Consumer of published snapshots (the rendering adapter).
///
/// `conditions` is the most recent live payload, `None` until the first
/// live poll completes. The chart series and the rolling rainfall total
/// live in `snapshot`; the current-conditions panel reads `conditions`.
#[async_trait::async_trait]
pub trait SnapshotSink: Send + Sync {
    async fn publish(
        &mut self,
        snapshot: &WindowSnapshot,
        conditions: Option<&LiveConditions>,
        status: &StationStatus,
    ) -> Result<()>;
}
