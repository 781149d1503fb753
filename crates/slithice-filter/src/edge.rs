//! Edge detection
//!
//! Sobel gradient magnitude, built from two raw convolutions.

use crate::convolve::convolve_raw;
use crate::tone::normalize_region;
use crate::window::SlidingWindow;
use crate::{FilterResult, Kernel};
use slithice_core::{IPix, Pix, PixMut, PixelDepth};
use tracing::debug;

/// Output of [`sobel`].
#[derive(Debug, Clone)]
pub struct SobelResult {
    /// Horizontal gradient; the 1-pixel rim holds the input samples
    pub dx: IPix,
    /// Vertical gradient; the 1-pixel rim holds the input samples
    pub dy: IPix,
    /// Normalized gradient magnitude; the 1-pixel rim is 0
    pub magnitude: Pix,
}

/// Compute Sobel gradients and their normalized magnitude.
///
/// The magnitude `floor(sqrt(dx^2 + dy^2))` is evaluated on the interior
/// `[1, W-2] x [1, H-2]` and normalized over its own extremes there. A flat
/// image has zero gradient everywhere, so its magnitude stays all zero.
///
/// # Errors
///
/// Fails for non-8 bpp input or images smaller than 3x3.
pub fn sobel(pix: &Pix) -> FilterResult<SobelResult> {
    let dx = convolve_raw(pix, &Kernel::sobel_x())?.pix;
    let dy = convolve_raw(pix, &Kernel::sobel_y())?.pix;

    let interior = SlidingWindow::new(3, 3)?.interior(pix.width(), pix.height());
    let mut mag = IPix::new(pix.width(), pix.height())?;
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for y in interior.y0..interior.y1 {
        let (gx, gy) = (dx.row(y), dy.row(y));
        let out = mag.row_mut(y);
        for x in interior.x0 as usize..interior.x1 as usize {
            let (a, b) = (gx[x] as f64, gy[x] as f64);
            let m = (a * a + b * b).sqrt() as i32;
            min = min.min(m);
            max = max.max(m);
            out[x] = m;
        }
    }

    debug!(
        width = pix.width(),
        height = pix.height(),
        min,
        max,
        "sobel"
    );

    let mut magnitude = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit8)?;
    normalize_region(&mag, max, min, interior, &mut magnitude)?;

    Ok(SobelResult {
        dx,
        dy,
        magnitude: magnitude.into(),
    })
}
