//! Error types for segpaint-core
//!
//! Provides a unified error type for mask construction, pixel access and
//! brush configuration. Geometry that merely falls outside a mask is never
//! an error: stamps are clipped silently and callers skip such points.

use thiserror::Error;

/// segpaint-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid mask dimensions
    #[error("invalid mask dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Label buffer does not match the requested dimensions
    #[error("dimension mismatch: expected {expected} labels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} mask")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed or serialized
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for segpaint-core operations
pub type Result<T> = std::result::Result<T, Error>;
