//! Channel isolation and display fitting for standalone images.
//!
//! These work on any `JsImage`, not just a session's working copy, so a
//! UI can preview decoded files before loading them.

use crate::types::{js_error, selector_from_u8, JsImage};
use retouch_core::{render, DisplayArea, FilterType};
use wasm_bindgen::prelude::*;

/// Keep one colour channel and zero the other two.
///
/// `channel`: 0 = all (copy), 1 = red, 2 = green, 3 = blue.
#[wasm_bindgen]
pub fn extract_channel(image: &JsImage, channel: u8) -> Result<JsImage, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    let filtered = selector_from_u8(channel).apply(&buffer);
    Ok(JsImage::from_buffer(&filtered))
}

/// Channel-filter `image` and scale it to fit `max_width x max_height`,
/// preserving aspect ratio.
#[wasm_bindgen]
pub fn fit_to_display(
    image: &JsImage,
    channel: u8,
    max_width: u32,
    max_height: u32,
) -> Result<JsImage, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    let area = DisplayArea {
        width: max_width,
        height: max_height,
    };
    let view = render(
        &buffer,
        selector_from_u8(channel),
        area,
        FilterType::Bilinear,
    );
    Ok(JsImage::from_rgb_image(view))
}
