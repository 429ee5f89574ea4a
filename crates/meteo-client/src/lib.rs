//! HTTP feed client for the station's live and history endpoints
//!
//! The two endpoints are read-only JSON over plain GET: `/live` returns
//! the current conditions object, `/history?hours=N` returns the trailing
//! samples oldest-to-newest.

pub mod http;

pub use http::*;

use meteo_core::{LiveConditions, RawSample};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Upstream data feed, abstracted so the poll loop can run against a
/// fake in tests.
#[async_trait::async_trait]
pub trait Feed: Send + Sync {
    /// Current conditions; polled on a fixed interval.
    async fn fetch_live(&mut self) -> ClientResult<LiveConditions>;

    /// Trailing history covering `hours`, ordered oldest to newest.
    async fn fetch_history(&mut self, hours: u32) -> ClientResult<Vec<RawSample>>;
}
