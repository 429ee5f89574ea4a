//! Station dashboard daemon
//!
//! This binary coordinates:
//! - One-time bootstrap of the 24h window from the history endpoint
//! - The recurring live poll and merge cycle
//! - Snapshot publication to the rendering adapter boundary

mod scheduler;
mod sink;

use anyhow::{Context, Result};
use tracing::info;

use meteo_client::StationClient;
use meteo_config::AppConfig;

use crate::scheduler::Poller;
use crate::sink::StdoutJsonSink;

#[tokio::main]
async fn main() -> Result<()> {
    meteo_obs::init("meteo-daemon");

    info!("Starting station dashboard daemon");

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(station = %config.station_id(), base_url = %config.base_url(), "Loaded configuration");

    let client = StationClient::new(&config.base_url()).context("Invalid feed base URL")?;

    let mut poller = Poller::new(
        Box::new(client),
        Box::new(StdoutJsonSink::new()),
        config.poll_interval(),
        config.history_hours(),
    );

    // Without a bootstrapped window there is nothing to display; fail
    // loudly instead of polling into the void.
    poller.bootstrap().await.context("Bootstrap failed")?;

    info!(
        capacity = poller.window().capacity(),
        "Window bootstrapped - daemon running, press Ctrl+C to stop"
    );

    tokio::select! {
        result = poller.run() => result,
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}

/// Wait for a graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to setup signal handler");
}
