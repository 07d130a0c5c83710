//! Trip-subsystem error type.

use thiserror::Error;

/// Errors produced by `tl-trips`.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TripResult<T> = Result<T, TripError>;

impl From<tl_core::TlError> for TripError {
    fn from(e: tl_core::TlError) -> Self {
        match e {
            tl_core::TlError::Io(io) => TripError::Io(io),
            other => TripError::Parse(other.to_string()),
        }
    }
}
