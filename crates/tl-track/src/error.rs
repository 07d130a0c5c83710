//! Trajectory-subsystem error type.

use thiserror::Error;

/// Errors produced by `tl-track`.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrackResult<T> = Result<T, TrackError>;

impl From<csv::Error> for TrackError {
    fn from(e: csv::Error) -> Self {
        TrackError::Parse(e.to_string())
    }
}
