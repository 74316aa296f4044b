//! Error types for the output codec.

use thiserror::Error;
use vout_core::{CodecError, ValidationError};

/// Errors that can occur while encoding or decoding output sequences.
#[derive(Debug, Error)]
pub enum VoutError {
    /// A single output failed to encode or decode.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The set of outputs violates an invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Number of outputs outside the configured bounds.
    #[error("invalid output count {count}: must be between {min} and {max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// Bytes left over after the last output.
    #[error("{0} trailing bytes after output sequence")]
    TrailingData(usize),

    /// Configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON text could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output codec operations.
pub type Result<T> = std::result::Result<T, VoutError>;
