//! Color space conversion
//!
//! - RGB -> gray (channel mean)
//! - RGB -> separate channel planes
//! - RGB <-> HSL on the 0-240 scale used by classic paint programs

use crate::ColorResult;
use crate::coloring::{map_color, require_depth};
use slithice_core::pix::set_data_byte;
use slithice_core::{Pix, PixMut, PixelDepth, color};
use tracing::debug;

/// Full scale of the hue, saturation and lightness components.
pub const HSL_MAX: i32 = 240;

const RGB_MAX: i32 = 255;

/// Hue reported for achromatic colors, where hue is undefined.
pub const HUE_UNDEFINED: u8 = (HSL_MAX * 2 / 3) as u8;

/// HSL color with every component on `0..=240`.
///
/// - `h`: hue, 0 = red, 80 = green, 160 = blue
/// - `s`: saturation, 0 = gray
/// - `l`: lightness, 0 = black, 240 = white
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u8,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: u8, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Mean of the three channels, truncated.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 + g as u32 + b as u32) / 3) as u8
}

/// Convert an RGB color to HSL.
///
/// Integer arithmetic throughout, rounding to nearest at each division.
/// Gray inputs get `s = 0` and `h = HUE_UNDEFINED`.
///
/// ```
/// use slithice_color::{Hsl, rgb_to_hsl};
///
/// assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 240, 120));
/// assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(160, 240, 120));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let l = (sum * HSL_MAX + RGB_MAX) / (2 * RGB_MAX);

    if max == min {
        return Hsl::new(HUE_UNDEFINED, 0, l as u8);
    }

    let delta = max - min;
    let s = if l <= HSL_MAX / 2 {
        (delta * HSL_MAX + sum / 2) / sum
    } else {
        let rest = 2 * RGB_MAX - sum;
        (delta * HSL_MAX + rest / 2) / rest
    };

    let sector = |c: i32| ((max - c) * (HSL_MAX / 6) + delta / 2) / delta;
    let (rd, gd, bd) = (sector(r), sector(g), sector(b));
    let mut h = if r == max {
        bd - gd
    } else if g == max {
        HSL_MAX / 3 + rd - bd
    } else {
        2 * HSL_MAX / 3 + gd - rd
    };
    if h < 0 {
        h += HSL_MAX;
    }
    if h > HSL_MAX {
        h -= HSL_MAX;
    }

    Hsl::new(h as u8, s as u8, l as u8)
}

fn hue_to_channel(m1: i32, m2: i32, hue: i32) -> i32 {
    let hue = if hue < 0 {
        hue + HSL_MAX
    } else if hue > HSL_MAX {
        hue - HSL_MAX
    } else {
        hue
    };
    if hue < HSL_MAX / 6 {
        m1 + ((m2 - m1) * hue + HSL_MAX / 12) / (HSL_MAX / 6)
    } else if hue < HSL_MAX / 2 {
        m2
    } else if hue < HSL_MAX * 2 / 3 {
        m1 + ((m2 - m1) * (HSL_MAX * 2 / 3 - hue) + HSL_MAX / 12) / (HSL_MAX / 6)
    } else {
        m1
    }
}

/// Convert an HSL color back to RGB.
///
/// The round trip through [`rgb_to_hsl`] is exact for gray levels up to 1
/// and for the primary and secondary colors. Elsewhere the 0-240 scale
/// loses precision: a channel can move by up to 4.
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let (h, s, l) = (hsl.h as i32, hsl.s as i32, hsl.l as i32);
    if s == 0 {
        let v = (l * RGB_MAX / HSL_MAX) as u8;
        return (v, v, v);
    }

    let m2 = if l <= HSL_MAX / 2 {
        (l * (HSL_MAX + s) + HSL_MAX / 2) / HSL_MAX
    } else {
        l + s - (l * s + HSL_MAX / 2) / HSL_MAX
    };
    let m1 = 2 * l - m2;

    let channel = |hue: i32| {
        let v = (hue_to_channel(m1, m2, hue) * RGB_MAX + HSL_MAX / 2) / HSL_MAX;
        v.clamp(0, RGB_MAX) as u8
    };
    (
        channel(h + HSL_MAX / 3),
        channel(h),
        channel(h - HSL_MAX / 3),
    )
}

/// Convert a 32 bpp image to 8 bpp gray using the channel mean.
pub fn to_grayscale(pix: &Pix) -> ColorResult<Pix> {
    require_depth(pix, PixelDepth::Bit32)?;
    debug!(width = pix.width(), height = pix.height(), "to_grayscale");

    let w = pix.width();
    let mut out = PixMut::new(w, pix.height(), PixelDepth::Bit8)?;
    for y in 0..pix.height() {
        let src = pix.row_data(y);
        let dst = out.row_data_mut(y);
        for x in 0..w {
            let (r, g, b) = color::extract_rgb(src[x as usize]);
            set_data_byte(dst, x, rgb_to_gray(r, g, b) as u32);
        }
    }
    Ok(out.into())
}

/// Split a 32 bpp image into three 8 bpp planes `(red, green, blue)`.
pub fn split_channels(pix: &Pix) -> ColorResult<(Pix, Pix, Pix)> {
    require_depth(pix, PixelDepth::Bit32)?;
    debug!(width = pix.width(), height = pix.height(), "split_channels");

    let (w, h) = (pix.width(), pix.height());
    let mut planes = [
        PixMut::new(w, h, PixelDepth::Bit8)?,
        PixMut::new(w, h, PixelDepth::Bit8)?,
        PixMut::new(w, h, PixelDepth::Bit8)?,
    ];
    for y in 0..h {
        let src = pix.row_data(y);
        for x in 0..w {
            let (r, g, b) = color::extract_rgb(src[x as usize]);
            for (plane, v) in planes.iter_mut().zip([r, g, b]) {
                set_data_byte(plane.row_data_mut(y), x, v as u32);
            }
        }
    }
    let [r, g, b] = planes;
    Ok((r.into(), g.into(), b.into()))
}

/// Split a 32 bpp image into three 32 bpp images, each keeping one color
/// channel and the alpha channel, with the other two channels zeroed.
pub fn split_channels_rgb(pix: &Pix) -> ColorResult<(Pix, Pix, Pix)> {
    debug!(width = pix.width(), height = pix.height(), "split_channels_rgb");
    Ok((
        map_color(pix, |word| word & color::RED_MASK)?,
        map_color(pix, |word| word & color::GREEN_MASK)?,
        map_color(pix, |word| word & color::BLUE_MASK)?,
    ))
}
