//! Rank filtering operations
//!
//! Median filtering over the shared sliding window. The output is seeded
//! with the input, so rim pixels where the window does not fit pass
//! through unchanged.
//!
//! # Median index
//!
//! Near the rim, non-square windows gather fewer than `mw * mh` samples.
//! [`MedianIndex`] selects how the median position is chosen in that case:
//!
//! - [`MedianIndex::FullWindow`] always picks index `(mw * mh) >> 1` of the
//!   sorted samples, even when fewer were gathered. This is the historical
//!   behavior and the default.
//! - [`MedianIndex::GatheredCount`] picks `len >> 1` of the samples that
//!   were actually gathered.
//!
//! When the chosen index falls past the gathered samples, the input pixel
//! is kept.

use crate::window::SlidingWindow;
use crate::FilterResult;
use slithice_core::Pix;
use tracing::debug;

/// How the median position is chosen in the sorted sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianIndex {
    /// Index `(mw * mh) >> 1`, regardless of how many samples were gathered
    #[default]
    FullWindow,
    /// Index `gathered >> 1`
    GatheredCount,
}

/// Options for [`median_filter_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedianOptions {
    /// Median index policy
    pub index: MedianIndex,
}

/// Apply a `width x height` median filter with the default options.
///
/// # Example
///
/// ```
/// use slithice_core::Pix;
/// use slithice_filter::median_filter;
///
/// let mut samples = [50u8; 9];
/// samples[4] = 255;
/// let pix = Pix::from_gray_samples(3, 3, &samples).unwrap();
/// let out = median_filter(&pix, 3, 3).unwrap();
/// assert_eq!(out.get_pixel(1, 1), Some(50));
/// ```
pub fn median_filter(pix: &Pix, width: u32, height: u32) -> FilterResult<Pix> {
    median_filter_with(pix, width, height, &MedianOptions::default())
}

/// Apply a `width x height` median filter.
pub fn median_filter_with(
    pix: &Pix,
    width: u32,
    height: u32,
    options: &MedianOptions,
) -> FilterResult<Pix> {
    debug!(
        width = pix.width(),
        height = pix.height(),
        mw = width,
        mh = height,
        index = ?options.index,
        "median_filter"
    );

    let window = SlidingWindow::new(width, height)?;
    let full = window.taps() >> 1;
    let mut out = pix.to_mut();
    let mut values: Vec<u8> = Vec::with_capacity(window.taps());

    window.for_each(pix, |x, y, samples| {
        values.clear();
        values.extend(samples.iter().map(|s| s.value));
        values.sort_unstable();
        let idx = match options.index {
            MedianIndex::FullWindow => full,
            MedianIndex::GatheredCount => values.len() >> 1,
        };
        if let Some(&v) = values.get(idx) {
            out.set_pixel_unchecked(x, y, v as u32);
        }
    })?;

    Ok(out.into())
}
