//! Core reading types, timestamp normalization, and payload validation
//!
//! This crate provides the value objects and the validation boundary
//! between the station's loosely-typed JSON feeds and the rest of the
//! dashboard.

pub mod payload;
pub mod reading;
pub mod timestamp;
pub mod validate;

pub use payload::*;
pub use reading::*;
pub use timestamp::*;
pub use validate::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
