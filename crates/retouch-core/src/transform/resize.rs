//! Resizing for the edit pipeline and for display scaling.
//!
//! All functions return new `ImageBuffer` instances without modifying the input.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::buffer::ImageBuffer;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to explicit or aspect-derived dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `target_width` - Requested width, if any
/// * `target_height` - Requested height, if any
/// * `filter` - Interpolation filter to use
///
/// # Behavior
///
/// - Both given: scaled to exactly `target_width x target_height`
/// - Only one given: the other side follows the aspect ratio
///   (see [`resize_dimensions`])
/// - Neither given: a copy of the input is returned
pub fn resize(
    image: &ImageBuffer,
    target_width: Option<NonZeroU32>,
    target_height: Option<NonZeroU32>,
    filter: FilterType,
) -> ImageBuffer {
    let (width, height) = resize_dimensions(
        image.width(),
        image.height(),
        target_width,
        target_height,
    );
    resize_exact(image, width, height, filter)
}

/// Compute the output dimensions of [`resize`].
///
/// When only one side is given, the other is `round(side * target / source_side)`
/// using exact integer arithmetic (halves round up), floored at 1 pixel.
pub fn resize_dimensions(
    width: u32,
    height: u32,
    target_width: Option<NonZeroU32>,
    target_height: Option<NonZeroU32>,
) -> (u32, u32) {
    match (target_width, target_height) {
        (Some(w), Some(h)) => (w.get(), h.get()),
        (Some(w), None) => (w.get(), scale_side(height, w.get(), width)),
        (None, Some(h)) => (scale_side(width, h.get(), height), h.get()),
        (None, None) => (width, height),
    }
}

/// Calculate dimensions that fit within `max_width x max_height` while
/// preserving aspect ratio. Small images are scaled up to fill the area.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    // Compare max_width / width against max_height / height without floats
    let width_bound = max_width as u64 * height as u64 <= max_height as u64 * width as u64;

    if width_bound {
        (max_width, scale_side(height, max_width, width))
    } else {
        (scale_side(width, max_height, height), max_height)
    }
}

/// Resize to exact dimensions. Callers guarantee non-zero targets.
pub(crate) fn resize_exact(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> ImageBuffer {
    // Fast path: if dimensions match, just clone
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    let resized = image::imageops::resize(
        &image.to_raster(),
        width,
        height,
        filter.to_image_filter(),
    );
    ImageBuffer::from_raster(resized)
}

/// `round(side * numerator / denominator)`, at least 1.
fn scale_side(side: u32, numerator: u32, denominator: u32) -> u32 {
    let den = denominator as u64;
    let scaled = (2 * side as u64 * numerator as u64 + den) / (2 * den);
    scaled.clamp(1, u32::MAX as u64) as u32
}
