//! Sliding 24h window over station readings
//!
//! Owns the capacity-bounded buffer of validated readings, the live-merge
//! ordering policy, the derived rolling rainfall total, and the
//! render-ready snapshot handed to the presentation layer.

pub mod buffer;
pub mod merge;
pub mod publish;
pub mod rollup;
pub mod snapshot;

pub use buffer::*;
pub use merge::*;
pub use publish::*;
pub use rollup::*;
pub use snapshot::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Window has not been bootstrapped")]
    NotBootstrapped,
}

pub type WindowResult<T> = Result<T, WindowError>;
