//! Impulse noise
//!
//! Salt-and-pepper noise drawn from a caller-supplied generator, so a seeded
//! generator reproduces the same output.

use crate::{FilterError, FilterResult};
use rand::Rng;
use rand::prelude::*;
use slithice_core::{Pix, PixelDepth};
use tracing::debug;

/// Options for [`add_salt_and_pepper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseOptions {
    /// Fraction of the pixel count to hit, in `[0, 1]`
    pub fraction: f64,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self { fraction: 0.1 }
    }
}

/// Set random pixels of an 8 bpp image to 0 or 255.
///
/// `floor(N * fraction)` positions are drawn uniformly from the `N` pixels
/// with replacement, so fewer distinct pixels may change. Each hit becomes
/// 0 or 255 with equal probability.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use slithice_core::Pix;
/// use slithice_filter::{NoiseOptions, add_salt_and_pepper};
///
/// let pix = Pix::from_gray_samples(10, 10, &[128; 100]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let noisy = add_salt_and_pepper(&pix, &NoiseOptions::default(), &mut rng).unwrap();
/// assert_eq!(noisy.width(), 10);
/// ```
pub fn add_salt_and_pepper<R>(pix: &Pix, options: &NoiseOptions, rng: &mut R) -> FilterResult<Pix>
where
    R: Rng + ?Sized,
{
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    if !(0.0..=1.0).contains(&options.fraction) {
        return Err(FilterError::InvalidParameters(format!(
            "noise fraction must be in [0, 1], got {}",
            options.fraction
        )));
    }

    let w = pix.width();
    let n = pix.pixel_count();
    let hits = (n as f64 * options.fraction) as usize;
    debug!(width = w, height = pix.height(), hits, "add_salt_and_pepper");

    let mut out = pix.to_mut();
    for _ in 0..hits {
        let idx = rng.random_range(0..n) as u32;
        let val = if rng.random_bool(0.5) { 255 } else { 0 };
        out.set_pixel_unchecked(idx % w, idx / w, val);
    }
    Ok(out.into())
}
