//! Sliding-window traversal
//!
//! The shared core of convolution and rank filtering. For a window of
//! `kw x kh` with center `(cx, cy) = (kw >> 1, kh >> 1)`, the traversal
//! visits every interior position `x in [cx, W - cx)`, `y in [cy, H - cy)`
//! and hands the callback the in-bounds window samples.
//!
//! # Mirrored indexing
//!
//! For window offset `(mi, mj)` the sample is read at
//!
//! ```text
//! sx = x + cy - (kw - mi - 1)
//! sy = y + cx - (kh - mj - 1)
//! ```
//!
//! and paired with the kernel tap `(kw - mi - 1, kh - mj - 1)`, which turns
//! the weighted sum into a true convolution rather than a correlation. The
//! center terms are crossed (`cy` shifts columns, `cx` shifts rows); for
//! square windows this is the ordinary centered window. Samples outside the
//! image are skipped, so non-square windows near the rim gather fewer than
//! `kw * kh` samples.
//!
//! Positions outside the interior are never visited; callers seed their
//! output with a copy of the input so those pixels pass through.

use crate::{FilterError, FilterResult};
use slithice_core::{Pix, PixelDepth};

/// One gathered window sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSample {
    /// Sample value read from the image
    pub value: u8,
    /// Row-major index of the mirrored kernel tap paired with this sample
    pub tap: usize,
}

/// Half-open rectangle of positions visited by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl Interior {
    /// True if `(x, y)` is visited.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Number of visited positions.
    pub fn area(&self) -> usize {
        (self.x1.saturating_sub(self.x0) as usize) * (self.y1.saturating_sub(self.y0) as usize)
    }
}

/// Parametric sliding window over an 8 bpp image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    width: u32,
    height: u32,
}

impl SlidingWindow {
    /// Create a `width x height` window.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if a dimension is zero.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "window dimensions must be > 0, got {width}x{height}"
            )));
        }
        Ok(SlidingWindow { width, height })
    }

    /// Window width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Window height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window center `(width >> 1, height >> 1)`.
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (self.width >> 1, self.height >> 1)
    }

    /// Number of taps in a full window.
    #[inline]
    pub fn taps(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Interior positions for an image of the given size.
    pub fn interior(&self, image_w: u32, image_h: u32) -> Interior {
        let (cx, cy) = self.center();
        Interior {
            x0: cx,
            x1: image_w.saturating_sub(cx),
            y0: cy,
            y1: image_h.saturating_sub(cy),
        }
    }

    /// Check that `pix` is 8 bpp and large enough to hold the window.
    pub fn check_image(&self, pix: &Pix) -> FilterResult<()> {
        if pix.depth() != PixelDepth::Bit8 {
            return Err(FilterError::UnsupportedDepth {
                expected: "8 bpp",
                actual: pix.depth().bits(),
            });
        }
        if self.width > pix.width() || self.height > pix.height() {
            return Err(FilterError::WindowTooLarge {
                window_w: self.width,
                window_h: self.height,
                width: pix.width(),
                height: pix.height(),
            });
        }
        Ok(())
    }

    /// Visit every interior position with its gathered samples.
    ///
    /// The callback receives `(x, y, samples)`; `samples` holds only the
    /// in-bounds reads, in window scan order (`mj` outer, `mi` inner).
    ///
    /// # Errors
    ///
    /// Fails if [`SlidingWindow::check_image`] fails; the callback is not
    /// invoked in that case.
    pub fn for_each<F>(&self, pix: &Pix, mut visit: F) -> FilterResult<()>
    where
        F: FnMut(u32, u32, &[WindowSample]),
    {
        self.check_image(pix)?;

        let w = pix.width() as i64;
        let h = pix.height() as i64;
        let source = unpack_gray(pix);
        let (cx, cy) = self.center();
        let (kw, kh) = (self.width as i64, self.height as i64);
        let interior = self.interior(pix.width(), pix.height());
        let mut gathered = Vec::with_capacity(self.taps());

        for y in interior.y0..interior.y1 {
            for x in interior.x0..interior.x1 {
                gathered.clear();
                for mj in 0..kh {
                    let mm = kh - mj - 1;
                    let sy = y as i64 + cx as i64 - mm;
                    if sy < 0 || sy >= h {
                        continue;
                    }
                    let row = &source[(sy * w) as usize..((sy + 1) * w) as usize];
                    for mi in 0..kw {
                        let nn = kw - mi - 1;
                        let sx = x as i64 + cy as i64 - nn;
                        if sx < 0 || sx >= w {
                            continue;
                        }
                        gathered.push(WindowSample {
                            value: row[sx as usize],
                            tap: (mm * kw + nn) as usize,
                        });
                    }
                }
                visit(x, y, &gathered);
            }
        }
        Ok(())
    }
}

/// Copy an 8 bpp image into a row-major byte vector.
///
/// Traversals read from this untouched copy, never from the output being
/// written.
pub(crate) fn unpack_gray(pix: &Pix) -> Vec<u8> {
    let mut out = Vec::with_capacity(pix.pixel_count());
    for y in 0..pix.height() {
        out.extend(pix.row_bytes(y));
    }
    out
}
