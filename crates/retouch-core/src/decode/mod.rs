//! Image loading for Retouch.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG images from bytes or files
//! - Applying EXIF orientation so photos display upright
//!
//! Decoded images are converted to the native BGR [`ImageBuffer`](crate::ImageBuffer)
//! layout used by the edit pipeline.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::load_image;
//!
//! let image = load_image("photo.jpg").unwrap();
//! println!("Loaded {}x{} image", image.width(), image.height());
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation, load_image};
pub use types::{DecodeError, Orientation};
