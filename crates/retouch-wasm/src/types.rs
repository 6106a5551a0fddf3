//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch types,
//! handling the conversion between Rust and JavaScript data representations.

use retouch_core::{BufferError, Channel, ChannelSelector, ImageBuffer};
use wasm_bindgen::prelude::*;

/// An image handed to JavaScript.
///
/// Pixels are exposed in **RGB** order (3 bytes per pixel, row-major), which
/// is what browsers and other JS libraries expect. The native BGR layout of
/// the core never crosses the boundary.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. For performance-critical code, consider
/// keeping the image in WASM memory and only extracting pixels when needed.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA samples ready for `new ImageData(data, width, height)`.
    #[wasm_bindgen(js_name = toImageData)]
    pub fn to_image_data(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(&self.rgba()[..])
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Wrap a core buffer, converting BGR to RGB.
    pub(crate) fn from_buffer(buffer: &ImageBuffer) -> Self {
        Self::from_rgb_image(buffer.to_rgb_image())
    }

    /// Wrap an already RGB-ordered raster, such as a render result.
    pub(crate) fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert back to a core buffer. Clones the pixel data.
    pub(crate) fn to_buffer(&self) -> Result<ImageBuffer, BufferError> {
        ImageBuffer::from_rgb(self.width, self.height, self.pixels.clone())
    }

    /// RGBA samples with an opaque alpha channel.
    pub(crate) fn rgba(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect()
    }
}

/// Convert a channel selector value from the UI to the core enum.
///
/// Values:
/// - 0 = All channels
/// - 1 = Red only
/// - 2 = Green only
/// - 3 = Blue only
///
/// Any other value shows all channels.
pub(crate) fn selector_from_u8(value: u8) -> ChannelSelector {
    match value {
        1 => Channel::Red.into(),
        2 => Channel::Green.into(),
        3 => Channel::Blue.into(),
        _ => ChannelSelector::All, // Default
    }
}

/// Turn any displayable error into a JS exception value.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
