//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test data
#[derive(Debug, Error)]
pub enum TestError {
    /// Malformed textual label map
    #[error("invalid label map at line {line}: {message}")]
    InvalidLabelMap { line: usize, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seedgrow_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
