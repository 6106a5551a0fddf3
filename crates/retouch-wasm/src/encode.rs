//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode a JsImage to JPEG bytes
//! - [`encode_png`] - Encode a JsImage to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg } from '@retouch/wasm';
//!
//! const jpeg = encode_jpeg(image, 90);
//! const writable = await fileHandle.createWritable();
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! await writable.close();
//! ```

use crate::types::{js_error, JsImage};
use retouch_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality, recommended: 90)
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match width * height * 3
/// or either dimension is zero.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    encode::encode_jpeg(&buffer, quality).map_err(js_error)
}

/// Encode an image to PNG bytes (lossless).
#[wasm_bindgen]
pub fn encode_png(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    encode::encode_png(&buffer).map_err(js_error)
}
