//! Per-pixel intensity and color maps
//!
//! Every function here reads one input pixel and writes one output pixel
//! at the same position; the input image is never modified.

use crate::{ColorError, ColorResult};
use slithice_core::{Pix, PixMut, PixelDepth, color};
use slithice_core::pix::{get_data_byte, set_data_byte};
use tracing::debug;

pub(crate) fn require_depth(pix: &Pix, depth: PixelDepth) -> ColorResult<()> {
    if pix.depth() != depth {
        return Err(ColorError::UnsupportedDepth {
            expected: match depth {
                PixelDepth::Bit8 => "8 bpp",
                PixelDepth::Bit32 => "32 bpp",
            },
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Map every sample of an 8 bpp image through `f`.
pub(crate) fn map_gray<F>(pix: &Pix, mut f: F) -> ColorResult<Pix>
where
    F: FnMut(u8) -> u8,
{
    require_depth(pix, PixelDepth::Bit8)?;
    let w = pix.width();
    let mut out = PixMut::new(w, pix.height(), PixelDepth::Bit8)?;
    for y in 0..pix.height() {
        let src = pix.row_data(y);
        let dst = out.row_data_mut(y);
        for x in 0..w {
            let v = f(get_data_byte(src, x) as u8);
            set_data_byte(dst, x, v as u32);
        }
    }
    Ok(out.into())
}

/// Map every word of a 32 bpp image through `f`.
pub(crate) fn map_color<F>(pix: &Pix, mut f: F) -> ColorResult<Pix>
where
    F: FnMut(u32) -> u32,
{
    require_depth(pix, PixelDepth::Bit32)?;
    let w = pix.width() as usize;
    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    for y in 0..pix.height() {
        let src = &pix.row_data(y)[..w];
        let dst = &mut out.row_data_mut(y)[..w];
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(s);
        }
    }
    Ok(out.into())
}

/// Photographic negative of an 8 bpp image: `255 - v`.
pub fn invert_gray(pix: &Pix) -> ColorResult<Pix> {
    debug!(width = pix.width(), height = pix.height(), "invert_gray");
    map_gray(pix, |v| 255 - v)
}

/// Photographic negative of a 32 bpp image.
///
/// Each of red, green and blue becomes `255 - c`; the result is opaque.
pub fn invert_color(pix: &Pix) -> ColorResult<Pix> {
    debug!(width = pix.width(), height = pix.height(), "invert_color");
    map_color(pix, |word| {
        let (r, g, b) = color::extract_rgb(word);
        color::compose_rgb(255 - r, 255 - g, 255 - b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slithice_test::{gradient_gray, ramp_color};

    #[test]
    fn test_invert_gray_is_involution() {
        let pix = gradient_gray(7, 5);
        let once = invert_gray(&pix).unwrap();
        assert_eq!(once.get_pixel(0, 0), Some(255));
        let twice = invert_gray(&once).unwrap();
        assert_eq!(twice.data(), pix.data());
    }

    #[test]
    fn test_invert_color_channels() {
        let mut pm = PixMut::new(1, 1, PixelDepth::Bit32).unwrap();
        pm.set_pixel_unchecked(0, 0, color::compose_rgba(10, 200, 255, 7));
        let out = invert_color(&pm.into()).unwrap();
        let word = out.get_pixel_unchecked(0, 0);
        assert_eq!(color::extract_rgb(word), (245, 55, 0));
        assert_eq!(color::alpha(word), 255);
    }

    #[test]
    fn test_depth_checked() {
        assert!(invert_gray(&ramp_color(2, 2)).is_err());
        assert!(invert_color(&gradient_gray(2, 2)).is_err());
    }
}
