//! Slithice Color - Per-pixel color and intensity maps
//!
//! This crate provides the point operations of the toolkit:
//!
//! - **Color space conversion** ([`colorspace`]): grayscale, channel split,
//!   RGB <-> HSL on the 0-240 scale
//! - **Coloring** ([`coloring`]): gray and color inversion
//! - **Thresholding** ([`threshold`]): binarization, low-cut thresholding

pub mod coloring;
pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use slithice_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    HSL_MAX, HUE_UNDEFINED, Hsl, hsl_to_rgb, rgb_to_gray, rgb_to_hsl, split_channels,
    split_channels_rgb, to_grayscale,
};

// Re-export coloring functions
pub use coloring::{invert_color, invert_gray};

// Re-export threshold functions
pub use threshold::{DEFAULT_BINARIZE_THRESHOLD, binarize, binarize_default, threshold_low};
