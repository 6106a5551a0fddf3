//! Retouch Core - Image editing library
//!
//! This crate provides the core editing functionality for Retouch: a
//! single-image session with an original and a working copy, an apply-edit
//! pipeline (resize, brightness reduction, circle annotation), channel
//! previews, and PNG/JPEG loading and saving.
//!
//! Pixel data is held in native BGR order throughout. Conversion to RGB
//! only happens at the codec and display boundaries.

pub mod buffer;
pub mod capture;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod session;
pub mod transform;

pub use buffer::ImageBuffer;
pub use capture::FrameSource;
pub use config::{DisplayArea, EditorConfig};
pub use decode::{decode_image, load_image, DecodeError};
pub use encode::{encode_jpeg, encode_png, save_image, EncodeError};
pub use error::{BufferError, CaptureError, ConfigError, EditError, Field};
pub use pipeline::{
    apply_edit, CircleSpec, EditParameters, EditPipeline, EditRequest, PipelineStage,
};
pub use render::{render, render_with};
pub use session::ImageSession;
pub use transform::{
    adjust_brightness, draw_circle, extract_channel, resize, Channel, ChannelSelector, FilterType,
    RingStyle,
};
