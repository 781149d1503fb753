//! Convolution operations
//!
//! One accumulation core, three result modes. Every mode seeds its output
//! with a copy of the input and then overwrites the interior, so the rim
//! where the kernel does not fit passes through unchanged.
//!
//! The accumulator is an `f32` sum of `sample * weight` over the mirrored
//! window, truncated toward zero to `i32`. What happens next is up to the
//! [`ConvolutionSink`]:
//!
//! - [`convolve_normalized`] stores the low 8 bits (the store wraps, it does
//!   not clamp)
//! - [`convolve_with_callback`] passes the accumulator through a caller
//!   transform, then stores the low 8 bits
//! - [`convolve_raw`] keeps the full `i32` and reports the buffer extrema

use crate::window::SlidingWindow;
use crate::{FilterResult, Kernel};
use slithice_core::{IPix, Pix, PixMut};
use tracing::debug;

/// Receiver for per-position convolution results.
pub trait ConvolutionSink {
    /// Store the truncated accumulator for interior position `(x, y)`.
    fn store(&mut self, x: u32, y: u32, acc: i32);
}

/// Narrowing 8-bit store.
pub struct NarrowSink<'a> {
    out: &'a mut PixMut,
}

impl<'a> NarrowSink<'a> {
    pub fn new(out: &'a mut PixMut) -> Self {
        NarrowSink { out }
    }
}

impl ConvolutionSink for NarrowSink<'_> {
    #[inline]
    fn store(&mut self, x: u32, y: u32, acc: i32) {
        self.out.set_pixel_unchecked(x, y, acc as u8 as u32);
    }
}

/// Transform, then narrowing 8-bit store.
pub struct TransformSink<'a, F> {
    out: &'a mut PixMut,
    transform: F,
}

impl<'a, F> TransformSink<'a, F>
where
    F: FnMut(i32) -> i32,
{
    pub fn new(out: &'a mut PixMut, transform: F) -> Self {
        TransformSink { out, transform }
    }
}

impl<F> ConvolutionSink for TransformSink<'_, F>
where
    F: FnMut(i32) -> i32,
{
    #[inline]
    fn store(&mut self, x: u32, y: u32, acc: i32) {
        let v = (self.transform)(acc);
        self.out.set_pixel_unchecked(x, y, v as u8 as u32);
    }
}

/// Unnarrowed store into a signed-integer buffer.
pub struct RawSink<'a> {
    out: &'a mut IPix,
}

impl<'a> RawSink<'a> {
    pub fn new(out: &'a mut IPix) -> Self {
        RawSink { out }
    }
}

impl ConvolutionSink for RawSink<'_> {
    #[inline]
    fn store(&mut self, x: u32, y: u32, acc: i32) {
        self.out.set_pixel_unchecked(x, y, acc);
    }
}

/// Result of [`convolve_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConvolution {
    /// Full-size accumulator buffer; the rim holds the input samples
    pub pix: IPix,
    /// Smallest value in `pix`
    pub min: i32,
    /// Largest value in `pix`
    pub max: i32,
}

/// Run the accumulation core over `pix`, feeding every interior result to
/// `sink`.
///
/// Nothing is written to the sink if the image is not 8 bpp or the kernel
/// does not fit.
pub fn convolve_into<S>(pix: &Pix, kernel: &Kernel, sink: &mut S) -> FilterResult<()>
where
    S: ConvolutionSink + ?Sized,
{
    let window = SlidingWindow::new(kernel.width(), kernel.height())?;
    let weights = kernel.data();
    window.for_each(pix, |x, y, samples| {
        let mut sum = 0.0f32;
        for s in samples {
            sum += s.value as f32 * weights[s.tap];
        }
        sink.store(x, y, sum as i32);
    })
}

/// Convolve an 8 bpp image, storing the low 8 bits of each accumulator.
///
/// Results outside `[0, 255]` wrap modulo 256. Use [`convolve_raw`] and
/// normalize when the kernel can leave that range.
///
/// # Example
///
/// ```
/// use slithice_core::Pix;
/// use slithice_filter::{Kernel, convolve_normalized};
///
/// let pix = Pix::from_gray_samples(4, 4, &[100; 16]).unwrap();
/// let out = convolve_normalized(&pix, &Kernel::box_kernel(3).unwrap()).unwrap();
/// assert_eq!(out.get_pixel(1, 1), Some(100));
/// ```
pub fn convolve_normalized(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    debug!(
        width = pix.width(),
        height = pix.height(),
        kw = kernel.width(),
        kh = kernel.height(),
        "convolve_normalized"
    );
    let mut out = pix.to_mut();
    convolve_into(pix, kernel, &mut NarrowSink::new(&mut out))?;
    Ok(out.into())
}

/// Convolve an 8 bpp image, mapping each accumulator through `transform`
/// before the 8-bit store.
///
/// The transform sees the truncated `i32` accumulator and decides the
/// scaling or clamping policy. Its result is still stored modulo 256.
pub fn convolve_with_callback<F>(pix: &Pix, kernel: &Kernel, transform: F) -> FilterResult<Pix>
where
    F: FnMut(i32) -> i32,
{
    debug!(
        width = pix.width(),
        height = pix.height(),
        kw = kernel.width(),
        kh = kernel.height(),
        "convolve_with_callback"
    );
    let mut out = pix.to_mut();
    convolve_into(pix, kernel, &mut TransformSink::new(&mut out, transform))?;
    Ok(out.into())
}

/// Convolve an 8 bpp image into a signed-integer buffer.
///
/// The buffer is seeded with the input samples, so the rim carries the
/// input values. `min` and `max` cover the whole buffer and can be fed
/// straight to [`crate::normalize`].
pub fn convolve_raw(pix: &Pix, kernel: &Kernel) -> FilterResult<RawConvolution> {
    let mut raw = IPix::from_gray(pix)?;
    convolve_into(pix, kernel, &mut RawSink::new(&mut raw))?;
    let (min, max) = raw.min_max();
    debug!(
        width = pix.width(),
        height = pix.height(),
        kw = kernel.width(),
        kh = kernel.height(),
        min,
        max,
        "convolve_raw"
    );
    Ok(RawConvolution { pix: raw, min, max })
}
