//! IPix - Signed-integer image
//!
//! `IPix` is a 2D array of `i32` values. It holds intermediate results
//! whose range does not fit in 8 bits (raw convolution sums, gradient
//! magnitudes, compressed intensities) until they are normalized back
//! into a gray [`Pix`].
//!
//! # Examples
//!
//! ```
//! use slithice_core::IPix;
//!
//! let mut ipix = IPix::new(4, 4).unwrap();
//! ipix.set_pixel(1, 2, -300).unwrap();
//! assert_eq!(ipix.get_pixel(1, 2).unwrap(), -300);
//! assert_eq!(ipix.min_max(), (-300, 0));
//! ```

use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// Signed-integer image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IPix {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<i32>,
}

impl IPix {
    /// Create a new IPix with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(IPix {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Create an IPix from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the data length does not match.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(IPix {
            width,
            height,
            data,
        })
    }

    /// Create an IPix holding the samples of an 8 bpp image.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDepth` if `pix` is not 8 bpp.
    pub fn from_gray(pix: &Pix) -> Result<Self> {
        if pix.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(pix.depth().bits()));
        }
        let mut data = Vec::with_capacity(pix.pixel_count());
        for y in 0..pix.height() {
            data.extend(pix.row_bytes(y).into_iter().map(i32::from));
        }
        Ok(IPix {
            width: pix.width(),
            height: pix.height(),
            data,
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get both dimensions
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<i32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: i32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Get the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> i32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel value at (x, y) without bounds checking
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: i32) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of pixel data
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [i32] {
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Smallest and largest value in the buffer, as `(min, max)`.
    pub fn min_max(&self) -> (i32, i32) {
        self.data
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_length_checked() {
        assert!(IPix::from_data(2, 2, vec![1, 2, 3]).is_err());
        let ipix = IPix::from_data(2, 2, vec![1, -2, 3, 4]).unwrap();
        assert_eq!(ipix.row(1), &[3, 4]);
        assert_eq!(ipix.min_max(), (-2, 4));
    }

    #[test]
    fn test_from_gray() {
        let pix = Pix::from_gray_samples(3, 1, &[0, 128, 255]).unwrap();
        let ipix = IPix::from_gray(&pix).unwrap();
        assert_eq!(ipix.data(), &[0, 128, 255]);
    }

    #[test]
    fn test_bounds() {
        let mut ipix = IPix::new(2, 3).unwrap();
        assert!(ipix.set_pixel(2, 0, 1).is_err());
        assert!(ipix.get_pixel(0, 3).is_err());
        ipix.row_mut(2)[1] = 9;
        assert_eq!(ipix.get_pixel(1, 2).unwrap(), 9);
    }
}
