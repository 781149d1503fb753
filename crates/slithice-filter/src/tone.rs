//! Tone mapping
//!
//! Linear normalization of signed-integer buffers back to 8 bpp, and
//! power-law dynamic range compression built on it.
//!
//! Normalization maps `[min, max]` onto `[0, 255]`:
//!
//! ```text
//! out = floor((v - min) * 255 / (max - min))
//! ```
//!
//! computed in floating point and truncated. The result is not clamped, so
//! `min` and `max` must be the true extremes of the buffer. When
//! `max == min` the input is flat and normalization does nothing.

use crate::window::Interior;
use crate::{FilterError, FilterResult};
use slithice_core::{IPix, Pix, PixMut, PixelDepth};
use tracing::debug;

/// Parameters for [`dynamic_range_compress`].
///
/// Each sample becomes `floor(c * v^gamma)` before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicRangeParams {
    /// Scale factor
    pub c: f32,
    /// Exponent; values below 1 lift the shadows
    pub gamma: f32,
}

impl Default for DynamicRangeParams {
    fn default() -> Self {
        Self { c: 1.0, gamma: 0.5 }
    }
}

impl DynamicRangeParams {
    fn validate(&self) -> FilterResult<()> {
        if !self.c.is_finite() || !self.gamma.is_finite() {
            return Err(FilterError::InvalidParameters(format!(
                "c and gamma must be finite, got c={} gamma={}",
                self.c, self.gamma
            )));
        }
        Ok(())
    }
}

/// Normalize `src` into a new 8 bpp image.
///
/// The destination starts zero-filled, so a flat input (`max == min`)
/// yields an all-zero image.
///
/// # Example
///
/// ```
/// use slithice_core::IPix;
/// use slithice_filter::normalize;
///
/// let ipix = IPix::from_data(3, 1, vec![-10, 0, 10]).unwrap();
/// let out = normalize(&ipix, 10, -10).unwrap();
/// assert_eq!(out.get_pixel(0, 0), Some(0));
/// assert_eq!(out.get_pixel(1, 0), Some(127));
/// assert_eq!(out.get_pixel(2, 0), Some(255));
/// ```
pub fn normalize(src: &IPix, max: i32, min: i32) -> FilterResult<Pix> {
    let mut out = PixMut::new(src.width(), src.height(), PixelDepth::Bit8)?;
    normalize_into(src, max, min, &mut out)?;
    Ok(out.into())
}

/// Normalize `src` into an existing 8 bpp image of the same size.
///
/// When `max == min`, `dst` is left untouched.
///
/// # Errors
///
/// Fails if `dst` is not 8 bpp, the sizes differ, or `max < min`.
pub fn normalize_into(src: &IPix, max: i32, min: i32, dst: &mut PixMut) -> FilterResult<()> {
    let full = Interior {
        x0: 0,
        x1: src.width(),
        y0: 0,
        y1: src.height(),
    };
    normalize_region(src, max, min, full, dst)
}

/// Normalize only the positions inside `region`.
pub(crate) fn normalize_region(
    src: &IPix,
    max: i32,
    min: i32,
    region: Interior,
    dst: &mut PixMut,
) -> FilterResult<()> {
    if dst.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8 bpp",
            actual: dst.depth().bits(),
        });
    }
    if src.dimensions() != (dst.width(), dst.height()) {
        return Err(slithice_core::Error::DimensionMismatch {
            expected: src.dimensions(),
            actual: (dst.width(), dst.height()),
        }
        .into());
    }
    if max < min {
        return Err(FilterError::InvalidParameters(format!(
            "max {max} is below min {min}"
        )));
    }
    if max == min {
        debug!(max, min, "normalize: flat input, nothing to do");
        return Ok(());
    }

    debug!(
        width = src.width(),
        height = src.height(),
        max,
        min,
        "normalize"
    );
    let range = (max as f64) - (min as f64);
    for y in region.y0..region.y1 {
        let row = src.row(y);
        for x in region.x0..region.x1 {
            let v = row[x as usize];
            let scaled = ((v as f64 - min as f64) * 255.0 / range) as i32;
            dst.set_pixel_unchecked(x, y, scaled as u8 as u32);
        }
    }
    Ok(())
}

/// Apply `floor(c * v^gamma)` to every sample, without normalizing.
///
/// Returns the compressed buffer with its `(min, max)`.
pub fn dynamic_range_compression_raw(
    pix: &Pix,
    params: &DynamicRangeParams,
) -> FilterResult<(IPix, i32, i32)> {
    params.validate()?;
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }

    let mut out = IPix::new(pix.width(), pix.height())?;
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for y in 0..pix.height() {
        let samples = pix.row_bytes(y);
        for (dst, &v) in out.row_mut(y).iter_mut().zip(samples.iter()) {
            let compressed = (params.c * (v as f32).powf(params.gamma)).floor() as i32;
            min = min.min(compressed);
            max = max.max(compressed);
            *dst = compressed;
        }
    }
    Ok((out, min, max))
}

/// Compress the dynamic range of an 8 bpp image and normalize the result.
///
/// A flat input compresses to a flat buffer, which normalizes to all zero.
pub fn dynamic_range_compress(pix: &Pix, params: &DynamicRangeParams) -> FilterResult<Pix> {
    let (compressed, min, max) = dynamic_range_compression_raw(pix, params)?;
    debug!(
        width = pix.width(),
        height = pix.height(),
        c = params.c,
        gamma = params.gamma,
        min,
        max,
        "dynamic_range_compress"
    );
    normalize(&compressed, max, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slithice_test::{flat_gray, gray_from_fn};

    #[test]
    fn test_extremes_map_to_full_range() {
        let ipix = IPix::from_data(2, 2, vec![-500, 3, 77, 1200]).unwrap();
        let (min, max) = ipix.min_max();
        let out = normalize(&ipix, max, min).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(0));
        assert_eq!(out.get_pixel(1, 1), Some(255));
    }

    #[test]
    fn test_flat_is_noop() {
        let ipix = IPix::from_data(2, 1, vec![42, 42]).unwrap();
        let mut dst = flat_gray(2, 1, 9).to_mut();
        normalize_into(&ipix, 42, 42, &mut dst).unwrap();
        let dst: Pix = dst.into();
        assert_eq!(dst.get_pixel(0, 0), Some(9));
        assert_eq!(dst.get_pixel(1, 0), Some(9));

        let fresh = normalize(&ipix, 42, 42).unwrap();
        assert_eq!(fresh.get_pixel(1, 0), Some(0));
    }

    #[test]
    fn test_bad_arguments() {
        let ipix = IPix::new(3, 3).unwrap();
        let mut small = PixMut::new(2, 3, PixelDepth::Bit8).unwrap();
        assert!(normalize_into(&ipix, 1, 0, &mut small).is_err());
        assert!(normalize(&ipix, 0, 1).is_err());
    }

    #[test]
    fn test_compression_values() {
        let pix = gray_from_fn(4, 1, |x, _| [0, 1, 5, 255][x as usize]);
        let (raw, min, max) =
            dynamic_range_compression_raw(&pix, &DynamicRangeParams::default()).unwrap();
        assert_eq!(raw.row(0), &[0, 1, 2, 15]);
        assert_eq!((min, max), (0, 15));

        let out = dynamic_range_compress(&pix, &DynamicRangeParams::default()).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(0));
        assert_eq!(out.get_pixel(2, 0), Some(34));
        assert_eq!(out.get_pixel(3, 0), Some(255));
    }

    #[test]
    fn test_non_finite_params_rejected() {
        let pix = flat_gray(2, 2, 1);
        let params = DynamicRangeParams {
            c: f32::NAN,
            gamma: 1.0,
        };
        assert!(dynamic_range_compress(&pix, &params).is_err());
    }
}
