//! Toolkit base error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `TlError` via `From` impls or keep them separate and wrap `TlError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `tl-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tl-*` crates.
pub type TlResult<T> = Result<T, TlError>;
