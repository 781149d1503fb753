//! Slithice Core - Raster buffers for image processing
//!
//! This crate provides the buffer types shared by every Slithice crate:
//!
//! - [`Pix`] / [`PixMut`] - Gray (8 bpp) and packed color (32 bpp) images
//! - [`IPix`] - Signed-integer intermediate image for unnarrowed results
//! - [`Histogram`] - 256-bin intensity distribution
//!
//! Engines never retain a reference to a buffer after they return; all
//! buffers are owned by the caller.

pub mod error;
pub mod histogram;
pub mod ipix;
pub mod pix;

pub use error::{Error, Result};
pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use ipix::IPix;
pub use pix::{Pix, PixMut, PixelDepth};

/// Channel helpers for packed 32-bit color words.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Mask keeping only the red channel (and alpha).
    pub const RED_MASK: u32 = 0xff00_00ff;
    /// Mask keeping only the green channel (and alpha).
    pub const GREEN_MASK: u32 = 0x00ff_00ff;
    /// Mask keeping only the blue channel (and alpha).
    pub const BLUE_MASK: u32 = 0x0000_ffff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

}
