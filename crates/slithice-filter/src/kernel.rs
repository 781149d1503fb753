//! Convolution kernels
//!
//! A kernel is a flat, row-major array of `width * height` weights. Its
//! center is `(width >> 1, height >> 1)`; even-sized kernels therefore have
//! an asymmetric center, which is kept as is.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if a dimension is zero or the
    /// slice length is not `width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be > 0, got {width}x{height}"
            )));
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel(
                "box kernel size must be > 0".into(),
            ));
        }
        let n = (size * size) as usize;
        Self::from_slice(size, size, &vec![1.0 / n as f32; n])
    }

    /// Horizontal-gradient Sobel kernel `Gx`.
    pub fn sobel_x() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// Vertical-gradient Sobel kernel `Gy`.
    pub fn sobel_y() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate (`width >> 1`).
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width >> 1
    }

    /// Get the center Y coordinate (`height >> 1`).
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height >> 1
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_validates_length() {
        assert!(Kernel::from_slice(3, 3, &[1.0; 8]).is_err());
        assert!(Kernel::from_slice(0, 3, &[]).is_err());
        let k = Kernel::from_slice(2, 1, &[0.5, 1.5]).unwrap();
        assert_eq!(k.get(1, 0), Some(1.5));
        assert_eq!(k.get(2, 0), None);
    }

    #[test]
    fn test_even_kernel_center_is_floor() {
        let k = Kernel::from_slice(4, 2, &[0.0; 8]).unwrap();
        assert_eq!(k.center_x(), 2);
        assert_eq!(k.center_y(), 1);
    }

    #[test]
    fn test_box_kernel_sums_to_one() {
        let k = Kernel::box_kernel(3).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-6);
        assert!(Kernel::box_kernel(0).is_err());
    }

    #[test]
    fn test_sobel_kernels_are_zero_sum() {
        assert_eq!(Kernel::sobel_x().sum(), 0.0);
        assert_eq!(Kernel::sobel_y().sum(), 0.0);
        assert_eq!(Kernel::sobel_x().get(2, 1), Some(2.0));
        assert_eq!(Kernel::sobel_y().get(1, 2), Some(2.0));
    }
}
