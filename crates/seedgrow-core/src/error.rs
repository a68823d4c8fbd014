//! Error types for seedgrow-core
//!
//! Provides a unified error type for the image containers in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::extent::Extent;
use thiserror::Error;

/// seedgrow-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}x{depth}")]
    InvalidDimension { width: u32, height: u32, depth: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Buffer extent mismatch
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: Extent, actual: Extent },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for seedgrow-core operations
pub type Result<T> = std::result::Result<T, Error>;
