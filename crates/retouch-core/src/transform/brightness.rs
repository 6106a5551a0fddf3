//! Brightness reduction in HSV space.
//!
//! Each pixel is converted to hue/saturation/value, the value is lowered by a
//! fixed amount and clamped, and the pixel is converted back. Hue and
//! saturation are untouched, so colours darken without shifting.
//!
//! There is no brightening path: the amount is unsigned.

use crate::buffer::{ImageBuffer, CHANNELS};

/// Lower the value channel of every pixel by `amount`, clamped at 0.
///
/// # Arguments
/// * `image` - Source image (native BGR order)
/// * `amount` - Value reduction on the 0-255 scale
///
/// # Returns
/// A new image with the same dimensions. For every pixel the output value
/// (`max(b, g, r)`) equals `max(0, input_value - amount)`.
pub fn adjust_brightness(image: &ImageBuffer, amount: u8) -> ImageBuffer {
    let mut out = image.clone();

    // Early exit if no adjustment
    if amount == 0 {
        return out;
    }

    let amount = amount as f32;
    for px in out.pixels_mut().chunks_exact_mut(CHANNELS) {
        let (h, s, v) = bgr_to_hsv(px[0], px[1], px[2]);
        let v = (v - amount).clamp(0.0, 255.0);
        px.copy_from_slice(&hsv_to_bgr(h, s, v));
    }
    out
}

/// Convert a native pixel to HSV.
///
/// Returns hue in degrees [0, 360), saturation in [0, 1] and value on the
/// 0-255 scale.
#[inline]
pub(crate) fn bgr_to_hsv(b: u8, g: u8, r: u8) -> (f32, f32, f32) {
    let (b, g, r) = (b as f32, g as f32, r as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, s, max)
}

/// Convert HSV back to a native pixel.
#[inline]
pub(crate) fn hsv_to_bgr(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [to_sample(b + m), to_sample(g + m), to_sample(r + m)]
}

#[inline]
fn to_sample(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
