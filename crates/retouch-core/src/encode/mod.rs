//! Image saving for Retouch.
//!
//! This module provides functionality for:
//! - Encoding images to PNG (lossless) or JPEG with configurable quality
//! - Writing them to disk, choosing the codec from the file extension
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::save_image;
//!
//! save_image(&image, "edited.jpg", 90).unwrap();
//! ```

mod writer;

pub use writer::{encode_jpeg, encode_png, save_image, EncodeError};
