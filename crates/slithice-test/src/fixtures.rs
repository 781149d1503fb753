//! Deterministic synthetic test images
//!
//! Every fixture is a pure function of its arguments so regression results
//! are reproducible without image files on disk.

use crate::error::{TestError, TestResult};
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::StdRng;
use slithice_core::{Pix, PixMut, PixelDepth, color};

/// Build an 8 bpp image by evaluating `f(x, y)` at every pixel.
///
/// # Errors
///
/// Returns [`TestError::Core`] for zero-sized geometry.
pub fn try_gray_from_fn(
    width: u32,
    height: u32,
    mut f: impl FnMut(u32, u32) -> u8,
) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit8)?;
    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, f(x, y) as u32);
        }
    }
    Ok(pm.into())
}

/// Build an 8 bpp image by evaluating `f(x, y)` at every pixel.
///
/// # Panics
///
/// Panics on zero-sized geometry; fixtures are test-only.
pub fn gray_from_fn(width: u32, height: u32, f: impl FnMut(u32, u32) -> u8) -> Pix {
    try_gray_from_fn(width, height, f).unwrap_or_else(|e| panic!("{e}"))
}

/// Constant image with every sample equal to `value`.
pub fn flat_gray(width: u32, height: u32, value: u8) -> Pix {
    gray_from_fn(width, height, |_, _| value)
}

/// Diagonal ramp covering the full 0..=255 range.
pub fn gradient_gray(width: u32, height: u32) -> Pix {
    let span = (width + height).saturating_sub(2).max(1);
    gray_from_fn(width, height, |x, y| ((x + y) * 255 / span) as u8)
}

/// Checkerboard of 0/255 squares with side `cell`.
///
/// # Panics
///
/// Panics if `cell` is zero.
pub fn checker_gray(width: u32, height: u32, cell: u32) -> Pix {
    if cell == 0 {
        panic!(
            "{}",
            TestError::InvalidFixture {
                name: "checker_gray",
                message: "cell size must be >= 1".to_string(),
            }
        );
    }
    gray_from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            0
        } else {
            255
        }
    })
}

/// Uniform random samples drawn from a seeded generator.
pub fn seeded_gray(width: u32, height: u32, seed: u64) -> Pix {
    let mut rng = StdRng::seed_from_u64(seed);
    gray_from_fn(width, height, |_, _| rng.random_range(0..=255u8))
}

/// 32 bpp image with red rising along x, green along y, blue constant.
pub fn ramp_color(width: u32, height: u32) -> Pix {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)
        .unwrap_or_else(|e| panic!("ramp_color: {e}"));
    let wspan = width.saturating_sub(1).max(1);
    let hspan = height.saturating_sub(1).max(1);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / wspan) as u8;
            let g = (y * 255 / hspan) as u8;
            pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, 90));
        }
    }
    pm.into()
}
