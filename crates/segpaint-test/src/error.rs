//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures or comparing results
#[derive(Debug, Error)]
pub enum TestError {
    /// ASCII fixture rows have different lengths
    #[error("fixture row {row} has width {actual}, expected {expected}")]
    RaggedFixture {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// ASCII fixture contains a character with no label meaning
    #[error("fixture row {row}, column {column}: unknown cell '{cell}'")]
    UnknownCell { row: usize, column: usize, cell: char },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] segpaint_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
