//! Stdout snapshot sink
//!
//! The rendering adapter is a separate process in this deployment; it
//! consumes one JSON document per line from stdout.

use anyhow::Result;
use meteo_core::LiveConditions;
use meteo_window::{SnapshotSink, StationStatus, WindowSnapshot};
use serde::Serialize;

#[derive(Default)]
pub struct StdoutJsonSink;

impl StdoutJsonSink {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct Published<'a> {
    status: &'a StationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<&'a LiveConditions>,
    #[serde(flatten)]
    snapshot: &'a WindowSnapshot,
}

#[async_trait::async_trait]
impl SnapshotSink for StdoutJsonSink {
    async fn publish(
        &mut self,
        snapshot: &WindowSnapshot,
        conditions: Option<&LiveConditions>,
        status: &StationStatus,
    ) -> Result<()> {
        let line = serde_json::to_string(&Published {
            status,
            conditions,
            snapshot,
        })?;
        println!("{line}");
        Ok(())
    }
}
