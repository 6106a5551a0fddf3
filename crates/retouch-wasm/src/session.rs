//! Editing session WASM bindings.
//!
//! `JsEditSession` owns one core session plus the pipeline that edits it.
//! The UI keeps the six edit fields as text and passes them on every
//! `applyEdit`; after a successful edit it should clear its fields, which
//! mirrors how the core clears an [`EditRequest`].
//!
//! # Example
//!
//! ```typescript
//! import { JsEditSession } from '@retouch/wasm';
//!
//! const session = new JsEditSession({ jpeg_quality: 85 });
//! session.loadBytes(new Uint8Array(await file.arrayBuffer()));
//!
//! try {
//!   session.applyEdit('', '50', '20', '', '', '');
//! } catch (message) {
//!   alert(message);
//! }
//!
//! const view = session.render(1); // red channel, fitted to the display area
//! ctx.putImageData(new ImageData(view.toImageData(), view.width, view.height), 0, 0);
//! ```

use retouch_core::{
    decode_image, encode_jpeg, encode_png, render_with, CaptureError, EditError, EditPipeline,
    EditRequest, EditorConfig, ImageBuffer, ImageSession,
};
use wasm_bindgen::prelude::*;

use crate::types::{js_error, selector_from_u8, JsImage};

/// An image editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditSession {
    session: ImageSession,
    pipeline: EditPipeline,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session.
    ///
    /// `config` is an optional partial `EditorConfig` object; missing keys
    /// take their defaults. Pass `undefined` for all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditSession, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        Self::with_config(config).map_err(js_error)
    }

    /// Decode PNG or JPEG bytes and start editing them.
    #[wasm_bindgen(js_name = loadBytes)]
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<JsImage, JsValue> {
        let buffer = decode_image(bytes).map_err(js_error)?;
        Ok(JsImage::from_buffer(self.session.load(buffer)))
    }

    /// Capture one camera frame given as RGBA samples (for example from
    /// `getImageData` on a canvas showing a `<video>` stream).
    #[wasm_bindgen(js_name = captureRgba)]
    pub fn capture_rgba(
        &mut self,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<JsImage, JsValue> {
        self.capture_frame(width, height, rgba)
            .map(JsImage::from_buffer)
            .map_err(js_error)
    }

    /// Apply an edit given as the raw text of the six edit fields.
    ///
    /// Empty fields are skipped. On failure the thrown message names the
    /// offending field and the session is unchanged.
    #[wasm_bindgen(js_name = applyEdit)]
    pub fn apply_edit(
        &mut self,
        width: String,
        height: String,
        brightness: String,
        center_x: String,
        center_y: String,
        radius: String,
    ) -> Result<JsImage, JsValue> {
        let mut request = EditRequest {
            width,
            height,
            brightness,
            center_x,
            center_y,
            radius,
        };
        self.apply_request(&mut request)
            .map(|image| JsImage::from_buffer(&image))
            .map_err(js_error)
    }

    /// Discard every edit and return to the loaded image.
    pub fn revert(&mut self) -> Result<JsImage, JsValue> {
        self.session
            .revert()
            .map(JsImage::from_buffer)
            .map_err(js_error)
    }

    /// Current image for display: channel-filtered and fitted to the
    /// configured display area.
    ///
    /// `channel`: 0 = all, 1 = red, 2 = green, 3 = blue.
    pub fn render(&self, channel: u8) -> Result<JsImage, JsValue> {
        self.render_current(channel).map_err(js_error)
    }

    /// The working copy at full size, or `undefined` before the first load.
    pub fn current(&self) -> Option<JsImage> {
        self.session.current().map(JsImage::from_buffer)
    }

    /// The loaded image at full size, or `undefined` before the first load.
    pub fn original(&self) -> Option<JsImage> {
        self.session.original().map(JsImage::from_buffer)
    }

    #[wasm_bindgen(getter, js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// Encode the current image as JPEG with the configured quality.
    #[wasm_bindgen(js_name = encodeJpeg)]
    pub fn encode_jpeg(&self) -> Result<Vec<u8>, JsValue> {
        let current = self.loaded().map_err(js_error)?;
        let quality = self.pipeline.config().jpeg_quality;
        encode_jpeg(current, quality).map_err(js_error)
    }

    /// Encode the current image as PNG.
    #[wasm_bindgen(js_name = encodePng)]
    pub fn encode_png(&self) -> Result<Vec<u8>, JsValue> {
        let current = self.loaded().map_err(js_error)?;
        encode_png(current).map_err(js_error)
    }
}

impl JsEditSession {
    pub(crate) fn with_config(config: EditorConfig) -> Result<Self, retouch_core::ConfigError> {
        Ok(Self {
            session: ImageSession::new(),
            pipeline: EditPipeline::new(config)?,
        })
    }

    fn capture_frame(
        &mut self,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<&ImageBuffer, CaptureError> {
        let mut source = || {
            let frame = ImageBuffer::from_rgba(width, height, rgba)?;
            Ok::<_, CaptureError>(frame)
        };
        self.session.capture(&mut source)
    }

    fn apply_request(&mut self, request: &mut EditRequest) -> Result<ImageBuffer, EditError> {
        self.pipeline.apply(&mut self.session, request)
    }

    fn loaded(&self) -> Result<&ImageBuffer, EditError> {
        self.session.current().ok_or(EditError::NoImageLoaded)
    }

    fn render_current(&self, channel: u8) -> Result<JsImage, EditError> {
        let current = self.loaded()?;
        let view = render_with(current, selector_from_u8(channel), self.pipeline.config());
        Ok(JsImage::from_rgb_image(view))
    }
}
