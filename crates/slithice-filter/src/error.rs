//! Error types for slithice-filter
//!
//! Malformed inputs (wrong depth, kernel larger than the image, mismatched
//! geometry) are contract violations: they are reported before any output
//! pixel is written.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] slithice_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth {
        /// Expected depth description
        expected: &'static str,
        /// Actual depth in bits
        actual: u32,
    },

    /// Kernel or window does not fit inside the image
    #[error("window {window_w}x{window_h} does not fit in {width}x{height} image")]
    WindowTooLarge {
        window_w: u32,
        window_h: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
