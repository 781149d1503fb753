//! PIX - The main image container
//!
//! The `Pix` structure is the raster buffer every Slithice operation reads
//! from and writes into. Two layouts are supported: 8 bpp gray samples and
//! 32 bpp packed color words.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - 8 bpp samples are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod histogram;

pub use access::*;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit packed RGB(A)
    Bit32 = 32,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 8 or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 255,
            PixelDepth::Bit32 => u32::MAX,
        }
    }
}

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Depth in bits per pixel
    depth: PixelDepth,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32, depth: PixelDepth) -> Self {
        let wpl = compute_wpl(width, depth);
        PixData {
            width,
            height,
            depth,
            wpl,
            data: vec![0u32; (wpl as usize) * (height as usize)],
        }
    }

    fn duplicate(&self) -> Self {
        PixData {
            width: self.width,
            height: self.height,
            depth: self.depth,
            wpl: self.wpl,
            data: self.data.clone(),
        }
    }
}

/// Compute words per line for given width and depth.
///
/// # Panics
///
/// Panics if the result would exceed `u32::MAX`.
#[inline]
fn compute_wpl(width: u32, depth: PixelDepth) -> u32 {
    let bits_per_line = u64::from(width) * u64::from(depth.bits());
    let wpl = bits_per_line.div_ceil(32);
    u32::try_from(wpl).unwrap_or_else(|_| {
        panic!(
            "image row too large: width={} depth={:?} requires {} words",
            width, depth, wpl
        )
    })
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use slithice_core::{Pix, PixelDepth};
///
/// // Create a new 8-bit grayscale image
/// let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height, depth)),
        })
    }

    /// Create an 8 bpp image from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `samples.len() != width * height`.
    pub fn from_gray_samples(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if samples.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {expected} samples for {width}x{height}, got {}",
                samples.len()
            )));
        }
        let mut pm = PixMut::new(width, height, PixelDepth::Bit8)?;
        for (y, row) in samples.chunks_exact(width as usize).enumerate() {
            let line = pm.row_data_mut(y as u32);
            for (x, &v) in row.iter().enumerate() {
                set_data_byte(line, x as u32, v as u32);
            }
        }
        Ok(pm.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.inner.width as usize) * (self.inner.height as usize)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Unpack one 8 bpp row into `width` samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or the image is not 8 bpp.
    pub fn row_bytes(&self, y: u32) -> Vec<u8> {
        assert_eq!(self.inner.depth, PixelDepth::Bit8, "row_bytes needs 8 bpp");
        let line = self.row_data(y);
        (0..self.inner.width)
            .map(|x| get_data_byte(line, x) as u8)
            .collect()
    }

    /// Create a new PIX with the same dimensions and depth as the source.
    ///
    /// The image data is initialized to zero.
    pub fn create_template(&self) -> Self {
        Pix {
            inner: Arc::new(PixData::zeroed(
                self.inner.width,
                self.inner.height,
                self.inner.depth,
            )),
        }
    }

    /// Check if two PIX have the same width, height, and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.depth == other.inner.depth
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.inner.duplicate()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified. Filters use this to
    /// seed their output so pass-through borders keep the input values.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.inner.duplicate(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a zero-filled mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(PixMut {
            inner: PixData::zeroed(width, height, depth),
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the words of a specific row.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to `val`.
    pub fn set_all(&mut self, val: u32) {
        let (w, h) = (self.inner.width, self.inner.height);
        for y in 0..h {
            for x in 0..w {
                self.set_pixel_unchecked(x, y, val);
            }
        }
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let pix = Pix::new(5, 3, PixelDepth::Bit8).unwrap();
        assert_eq!(pix.wpl(), 2);
        assert!(pix.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Pix::new(0, 3, PixelDepth::Bit8).is_err());
        assert!(PixMut::new(3, 0, PixelDepth::Bit32).is_err());
    }

    #[test]
    fn test_from_gray_samples() {
        let samples: Vec<u8> = (0..12).collect();
        let pix = Pix::from_gray_samples(4, 3, &samples).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(3, 2), Some(11));
        assert_eq!(pix.row_bytes(1), vec![4, 5, 6, 7]);
        assert!(Pix::from_gray_samples(4, 4, &samples).is_err());
    }

    #[test]
    fn test_to_mut_is_independent() {
        let pix = Pix::from_gray_samples(2, 2, &[1, 2, 3, 4]).unwrap();
        let mut pm = pix.to_mut();
        pm.set_pixel_unchecked(0, 0, 200);
        let copy: Pix = pm.into();
        assert_eq!(pix.get_pixel(0, 0), Some(1));
        assert_eq!(copy.get_pixel(0, 0), Some(200));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        let shared = pix.clone();
        assert!(pix.try_into_mut().is_err());
        assert!(shared.try_into_mut().is_ok());
    }

    #[test]
    fn test_depth_from_bits() {
        assert_eq!(PixelDepth::from_bits(8).unwrap(), PixelDepth::Bit8);
        assert_eq!(PixelDepth::from_bits(32).unwrap(), PixelDepth::Bit32);
        assert!(PixelDepth::from_bits(16).is_err());
    }
}
