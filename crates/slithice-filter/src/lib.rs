//! slithice-filter - Windowed filters and tone mapping
//!
//! This crate provides the gray-image engines:
//!
//! - Sliding-window traversal with mirrored kernel indexing
//! - Convolution in three result modes (8-bit, callback, raw integer)
//! - Median filtering
//! - Histogram construction and equalization
//! - Normalization and dynamic range compression
//! - Sobel edge detection
//! - Salt-and-pepper noise
//!
//! Every windowed operation leaves the rim where the window does not fit
//! equal to the input.

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;
pub mod noise;
pub mod rank;
pub mod tone;
pub mod window;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{
    ConvolutionSink, RawConvolution, convolve_into, convolve_normalized, convolve_raw,
    convolve_with_callback,
};
pub use edge::{SobelResult, sobel};
pub use enhance::{
    EqualizationLut, build_histogram, equalization_lut, equalize_histogram,
    equalize_histogram_in_place,
};
pub use noise::{NoiseOptions, add_salt_and_pepper};
pub use rank::{MedianIndex, MedianOptions, median_filter, median_filter_with};
pub use tone::{
    DynamicRangeParams, dynamic_range_compress, dynamic_range_compression_raw, normalize,
    normalize_into,
};
pub use window::{Interior, SlidingWindow, WindowSample};
