//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] slithice_core::Error),

    /// Fixture parameters that cannot describe an image
    #[error("invalid fixture '{name}': {message}")]
    InvalidFixture { name: &'static str, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
