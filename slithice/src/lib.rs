//! Slithice - Raster image processing toolkit
//!
//! Gray and packed-color raster operations:
//!
//! - Windowed filters: convolution (8-bit, callback, raw integer), median
//! - Histogram construction and equalization
//! - Tone mapping: normalization, dynamic range compression
//! - Sobel edge detection
//! - Per-pixel maps: grayscale, channel split, inversion, thresholding,
//!   RGB <-> HSL
//!
//! # Example
//!
//! ```
//! use slithice::filter::{Kernel, convolve_normalized};
//! use slithice::{Pix, PixelDepth};
//!
//! let pix = Pix::from_gray_samples(4, 4, &[100; 16]).unwrap();
//! let blurred = convolve_normalized(&pix, &Kernel::box_kernel(3).unwrap()).unwrap();
//! assert_eq!(blurred.depth(), PixelDepth::Bit8);
//! assert_eq!(blurred.get_pixel(1, 2), Some(100));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use slithice_core::*;

// Re-export domain crates as modules to avoid name conflicts
// (`color` is taken by the channel helpers of the core crate)
pub use slithice_color as color_ops;
pub use slithice_filter as filter;
