//! Error types for seedgrow-region

use thiserror::Error;

/// Errors that can occur during region growing
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seedgrow_core::Error),

    /// Seed placed on a pixel excluded by the mask
    #[error("invalid seed position: ({x}, {y}, {z}) is masked out")]
    InvalidSeed { x: u32, y: u32, z: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A required input was never supplied
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The seed image contains no seed pixel
    #[error("seed image contains no seeds")]
    NoSeeds,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
