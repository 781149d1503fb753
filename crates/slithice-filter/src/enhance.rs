//! Histogram construction and equalization
//!
//! Equalization maps every sample through a lookup table built from the
//! cumulative histogram, then rebuilds the histogram of the result in the
//! same pass.

use crate::{FilterError, FilterResult};
use slithice_core::pix::{get_data_byte, set_data_byte};
use slithice_core::{HISTOGRAM_BINS, Histogram, Pix, PixMut, PixelDepth};
use tracing::debug;

/// A 256-entry lookup table mapping input samples to output samples.
pub type EqualizationLut = [u8; HISTOGRAM_BINS];

/// Count the samples of an 8 bpp image per intensity.
///
/// The counts always sum to `width * height`.
pub fn build_histogram(pix: &Pix) -> FilterResult<Histogram> {
    check_gray(pix.depth())?;
    let hist = pix.gray_histogram()?;
    debug!(
        width = pix.width(),
        height = pix.height(),
        occupied = hist.occupied_bins(),
        "build_histogram"
    );
    Ok(hist)
}

/// Build the equalization table for `hist` over `pixel_count` pixels.
///
/// `lut[v] = max(0, floor(cumulative[v] * 255 / pixel_count) - 1)`, where
/// `cumulative[v]` counts the samples `<= v`. The table is non-decreasing.
/// The `- 1` turns a count into a 0-based level, so the lowest occupied
/// bin of a uniform image maps to 0 rather than -1.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `pixel_count` is 0.
pub fn equalization_lut(hist: &Histogram, pixel_count: usize) -> FilterResult<EqualizationLut> {
    if pixel_count == 0 {
        return Err(FilterError::InvalidParameters(
            "equalization needs at least one pixel".into(),
        ));
    }
    let scale = 255.0f32 / pixel_count as f32;
    let cumulative = hist.cumulative();
    let mut lut = [0u8; HISTOGRAM_BINS];
    for (entry, &acc) in lut.iter_mut().zip(cumulative.iter()) {
        let level = (acc as f32 * scale) as i32 - 1;
        *entry = level.clamp(0, 255) as u8;
    }
    Ok(lut)
}

/// Equalize an 8 bpp image.
///
/// Returns the equalized image together with its histogram. `hist` is the
/// histogram of `pix`, usually from [`build_histogram`]; it is only read.
///
/// # Example
///
/// ```
/// use slithice_core::Pix;
/// use slithice_filter::{build_histogram, equalize_histogram};
///
/// let pix = Pix::from_gray_samples(2, 2, &[10, 10, 20, 30]).unwrap();
/// let hist = build_histogram(&pix).unwrap();
/// let (out, out_hist) = equalize_histogram(&pix, &hist).unwrap();
/// assert_eq!(out.get_pixel(1, 1), Some(254));
/// assert_eq!(out_hist.total(), 4);
/// ```
pub fn equalize_histogram(pix: &Pix, hist: &Histogram) -> FilterResult<(Pix, Histogram)> {
    check_gray(pix.depth())?;
    let mut out = pix.to_mut();
    let mut out_hist = hist.clone();
    equalize_histogram_in_place(&mut out, &mut out_hist)?;
    Ok((out.into(), out_hist))
}

/// Equalize an 8 bpp image in place.
///
/// On entry `hist` is the histogram of `pix`; on success it holds the
/// histogram of the equalized image. On error neither argument is
/// modified.
pub fn equalize_histogram_in_place(pix: &mut PixMut, hist: &mut Histogram) -> FilterResult<()> {
    check_gray(pix.depth())?;
    let w = pix.width();
    let h = pix.height();
    let lut = equalization_lut(hist, (w as usize) * (h as usize))?;

    hist.clear();
    for y in 0..h {
        let line = pix.row_data_mut(y);
        for x in 0..w {
            let v = lut[get_data_byte(line, x) as usize];
            set_data_byte(line, x, v as u32);
            hist.increment(v);
        }
    }

    debug!(
        width = w,
        height = h,
        occupied = hist.occupied_bins(),
        "equalize_histogram"
    );
    Ok(())
}

fn check_gray(depth: PixelDepth) -> FilterResult<()> {
    if depth != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8 bpp",
            actual: depth.bits(),
        });
    }
    Ok(())
}
