//! Display rendering.
//!
//! Turns a buffer into something a host can paint: the channel filter is
//! applied, samples are put in RGB order and the result is scaled to fit
//! the display area. The session is never touched.

use image::RgbImage;

use crate::buffer::ImageBuffer;
use crate::config::{DisplayArea, EditorConfig};
use crate::transform::{fit_dimensions, resize_exact, ChannelSelector, FilterType};

/// Render `image` for display inside `area`, preserving aspect ratio.
///
/// Images smaller than the area are scaled up, larger ones down.
pub fn render(
    image: &ImageBuffer,
    selector: ChannelSelector,
    area: DisplayArea,
    filter: FilterType,
) -> RgbImage {
    let filtered = selector.apply(image);
    let (width, height) = fit_dimensions(
        filtered.width(),
        filtered.height(),
        area.width,
        area.height,
    );

    // An empty display area has nothing to fit into
    if width == 0 || height == 0 {
        return filtered.to_rgb_image();
    }

    log::debug!(
        "Rendering {}x{} as {width}x{height}",
        filtered.width(),
        filtered.height()
    );
    resize_exact(&filtered, width, height, filter)
        .to_rgb_image()
}

/// [`render`] with the display settings from `config`.
pub fn render_with(
    image: &ImageBuffer,
    selector: ChannelSelector,
    config: &EditorConfig,
) -> RgbImage {
    render(image, selector, config.display, config.display_filter)
}
