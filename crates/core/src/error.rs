//! Error types for the grid-art core.

use thiserror::Error;

/// Errors produced by pattern generation and its hosts.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Canvas dimensions could not be represented (the RGBA buffer length
    /// overflows `usize`, or an encoder rejected a zero or oversized side).
    #[error("invalid dimensions: canvas width and height must be representable")]
    InvalidDimensions,

    /// The grid had zero rows or zero columns.
    #[error("invalid grid: rows ({rows}) and cols ({cols}) must be non-zero")]
    InvalidGrid { rows: usize, cols: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A generated buffer did not have `width * height * 4` elements.
    #[error("buffer size mismatch: expected {expected} values, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// Writing or uploading a buffer failed.
    #[error("I/O error: {0}")]
    Io(String),
}
