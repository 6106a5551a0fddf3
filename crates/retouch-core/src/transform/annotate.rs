//! Circle annotation.
//!
//! Draws a ring outline (never filled) onto a copy of the image. The ring
//! must fit entirely inside the image; geometry that pokes past any edge is
//! rejected rather than clipped.
//!
//! # Rasterization
//!
//! A pixel is painted when its distance `d` from the circle centre satisfies
//! `radius - t/2 <= d < radius + t/2`, where `t` is the ring thickness. With
//! the default thickness of 2 this paints the pixels at distance `radius - 1`
//! and `radius` along the axes.

use serde::{Deserialize, Serialize};

use crate::buffer::{ImageBuffer, CHANNELS};
use crate::error::EditError;

/// Colour and thickness of circle annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingStyle {
    /// Ring colour in native BGR order
    pub color: [u8; 3],
    /// Ring width in pixels
    pub thickness: u32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            // Pure red in BGR
            color: [0, 0, 255],
            thickness: 2,
        }
    }
}

/// Draw a ring centred at (`center_x`, `center_y`).
///
/// # Errors
///
/// Returns [`EditError::OutOfBounds`] when the centre lies outside the
/// image, the radius is not positive, or the circle reaches past any edge
/// (`center - radius < 0` or `center + radius >= size` on either axis).
pub fn draw_circle(
    image: &ImageBuffer,
    center_x: i64,
    center_y: i64,
    radius: i64,
    style: &RingStyle,
) -> Result<ImageBuffer, EditError> {
    check_bounds(image, center_x, center_y, radius)?;

    let mut out = image.clone();
    let (width, height) = (image.width() as i64, image.height() as i64);

    let half = style.thickness as f64 / 2.0;
    let inner = (radius as f64 - half).max(0.0);
    let outer = radius as f64 + half;
    let (inner_sq, outer_sq) = (inner * inner, outer * outer);
    let reach = outer.ceil() as i64;

    let x_range = (center_x - reach).max(0)..=(center_x + reach).min(width - 1);
    let y_range = (center_y - reach).max(0)..=(center_y + reach).min(height - 1);

    let pixels = out.pixels_mut();
    for y in y_range {
        let dy = (y - center_y) as f64;
        for x in x_range.clone() {
            let dx = (x - center_x) as f64;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq >= inner_sq && dist_sq < outer_sq {
                let i = (y * width + x) as usize * CHANNELS;
                pixels[i..i + CHANNELS].copy_from_slice(&style.color);
            }
        }
    }

    Ok(out)
}

fn check_bounds(
    image: &ImageBuffer,
    center_x: i64,
    center_y: i64,
    radius: i64,
) -> Result<(), EditError> {
    let (width, height) = (image.width() as i64, image.height() as i64);

    let center_inside = (0..width).contains(&center_x) && (0..height).contains(&center_y);
    // Distances to each edge only fit in i64 once the centre is inside
    let fits = center_inside
        && radius > 0
        && radius <= center_x
        && radius < width - center_x
        && radius <= center_y
        && radius < height - center_y;

    if !fits {
        return Err(EditError::OutOfBounds {
            center_x,
            center_y,
            radius,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [0, 0, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    fn black(width: u32, height: u32) -> ImageBuffer {
        ImageBuffer::filled(width, height, BLACK).unwrap()
    }

    fn draw(img: &ImageBuffer, cx: i64, cy: i64, r: i64) -> Result<ImageBuffer, EditError> {
        draw_circle(img, cx, cy, r, &RingStyle::default())
    }

    #[test]
    fn test_rejects_circle_past_left_edge() {
        let img = black(100, 100);
        let err = draw(&img, 10, 10, 20).unwrap_err();
        assert_eq!(
            err,
            EditError::OutOfBounds {
                center_x: 10,
                center_y: 10,
                radius: 20,
                width: 100,
                height: 100,
            }
        );
    }

    #[test]
    fn test_rejects_center_outside() {
        let img = black(100, 100);
        assert!(draw(&img, -1, 50, 5).is_err());
        assert!(draw(&img, 100, 50, 5).is_err());
        assert!(draw(&img, 50, 100, 5).is_err());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let img = black(100, 100);
        assert!(draw(&img, 50, 50, 0).is_err());
        assert!(draw(&img, 50, 50, -3).is_err());
    }

    #[test]
    fn test_rejects_touching_far_edge() {
        let img = black(100, 100);
        // 50 + 50 == width
        assert!(draw(&img, 50, 50, 50).is_err());
        // 49 + 50 == 99 fits, 49 - 50 < 0 does not
        assert!(draw(&img, 49, 50, 50).is_err());
        assert!(draw(&img, 50, 50, 49).is_ok());
    }

    #[test]
    fn test_ring_pixels() {
        let img = black(100, 50);
        let out = draw(&img, 50, 25, 10).unwrap();

        // On the ring along each axis
        assert_eq!(out.pixel(60, 25), Some(RED));
        assert_eq!(out.pixel(40, 25), Some(RED));
        assert_eq!(out.pixel(50, 15), Some(RED));
        assert_eq!(out.pixel(50, 35), Some(RED));
        assert_eq!(out.pixel(59, 25), Some(RED));

        // Not filled, and nothing outside
        assert_eq!(out.pixel(50, 25), Some(BLACK));
        assert_eq!(out.pixel(55, 25), Some(BLACK));
        assert_eq!(out.pixel(61, 25), Some(BLACK));
        assert_eq!(out.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn test_ring_only_touches_band() {
        let img = black(100, 50);
        let out = draw(&img, 50, 25, 10).unwrap();

        for y in 0..50u32 {
            for x in 0..100u32 {
                let dx = x as f64 - 50.0;
                let dy = y as f64 - 25.0;
                let d = (dx * dx + dy * dy).sqrt();
                let px = out.pixel(x, y).unwrap();
                if (9.0..11.0).contains(&d) {
                    assert_eq!(px, RED, "({x}, {y}) at distance {d}");
                } else {
                    assert_eq!(px, BLACK, "({x}, {y}) at distance {d}");
                }
            }
        }
    }

    #[test]
    fn test_extreme_values_are_rejected() {
        let img = black(100, 100);
        for (cx, cy, r) in [
            (i64::MAX, i64::MIN, i64::MAX),
            (50, 50, i64::MAX),
            (50, 50, i64::MIN),
            (i64::MIN, 50, 10),
            (99, 99, i64::MAX),
        ] {
            assert!(
                matches!(draw(&img, cx, cy, r), Err(EditError::OutOfBounds { .. })),
                "({cx}, {cy}) r={r}"
            );
        }
    }

    #[test]
    fn test_circle_touching_last_pixel_is_rejected() {
        let img = black(100, 100);
        // 50 + 49 = 99 is the last column, 50 + 50 is past it
        assert!(draw(&img, 50, 50, 49).is_ok());
        assert!(draw(&img, 50, 50, 50).is_err());
        // The left edge may be touched
        assert!(draw(&img, 49, 50, 49).is_ok());
    }

    #[test]
    fn test_input_not_mutated() {
        let img = black(40, 40);
        let _ = draw(&img, 20, 20, 5).unwrap();
        assert!(img.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_custom_style() {
        let img = black(40, 40);
        let style = RingStyle {
            color: [255, 255, 255],
            thickness: 1,
        };
        let out = draw_circle(&img, 20, 20, 5, &style).unwrap();
        assert_eq!(out.pixel(25, 20), Some([255, 255, 255]));
        // Thickness 1 paints [4.5, 5.5) only
        assert_eq!(out.pixel(24, 20), Some(BLACK));
    }

    #[test]
    fn test_thick_ring_clips_at_edge() {
        let img = black(21, 21);
        let style = RingStyle {
            color: RED,
            thickness: 6,
        };
        // Radius fits, the thick band reaches past the edge and is clipped
        let out = draw_circle(&img, 10, 10, 9, &style).unwrap();
        assert_eq!(out.pixel(20, 10), Some(RED));
    }
}
