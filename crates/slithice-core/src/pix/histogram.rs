//! Histogram generation for Pix images

use super::{Pix, PixelDepth, get_data_byte};
use crate::Histogram;
use crate::error::{Error, Result};

impl Pix {
    /// Get the 256-bin histogram of an 8 bpp image.
    ///
    /// Every pixel is counted, so `hist.total() == width * height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for 32 bpp images.
    ///
    /// # Example
    ///
    /// ```
    /// use slithice_core::{Pix, PixelDepth};
    ///
    /// let pix = Pix::new(10, 10, PixelDepth::Bit8).unwrap();
    /// let hist = pix.gray_histogram().unwrap();
    /// assert_eq!(hist.get(0), 100);
    /// ```
    pub fn gray_histogram(&self) -> Result<Histogram> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let width = self.width();
        let mut histogram = Histogram::new();
        for y in 0..self.height() {
            let line = self.row_data(y);
            for x in 0..width {
                histogram.increment(get_data_byte(line, x) as u8);
            }
        }
        Ok(histogram)
    }
}
