//! LUT generation error types.

use thiserror::Error;

/// Result type for LUT configuration and generation.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while loading a configuration or baking a LUT.
#[derive(Debug, Error)]
pub enum LutError {
    /// Grid size too small to normalize (needs at least two points per axis).
    #[error("invalid LUT size: {0} (must be at least 2)")]
    InvalidSize(i64),

    /// Malformed JSON configuration.
    #[error("parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
