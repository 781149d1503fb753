//! Thresholding
//!
//! Both operations keep the 8 bpp layout: a binarized image holds only the
//! samples 0 and 255.

use crate::ColorResult;
use crate::coloring::map_gray;
use slithice_core::Pix;
use tracing::debug;

/// Threshold used by [`binarize_default`].
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 128;

/// Map samples below `threshold` to 0 and the rest to 255.
///
/// # Example
///
/// ```
/// use slithice_core::Pix;
/// use slithice_color::binarize;
///
/// let pix = Pix::from_gray_samples(3, 1, &[127, 128, 200]).unwrap();
/// let out = binarize(&pix, 128).unwrap();
/// assert_eq!(out.row_bytes(0), vec![0, 255, 255]);
/// ```
pub fn binarize(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    debug!(width = pix.width(), height = pix.height(), threshold, "binarize");
    map_gray(pix, |v| if v < threshold { 0 } else { 255 })
}

/// [`binarize`] at [`DEFAULT_BINARIZE_THRESHOLD`].
pub fn binarize_default(pix: &Pix) -> ColorResult<Pix> {
    binarize(pix, DEFAULT_BINARIZE_THRESHOLD)
}

/// Map samples below `threshold` to 0, leaving the rest unchanged.
pub fn threshold_low(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    debug!(width = pix.width(), height = pix.height(), threshold, "threshold_low");
    map_gray(pix, |v| if v < threshold { 0 } else { v })
}
