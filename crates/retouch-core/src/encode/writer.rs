//! PNG and JPEG encoding for saving edited images.
//!
//! Buffers are converted from native BGR to RGB before encoding, so files
//! written here open with correct colours in any viewer.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::buffer::ImageBuffer;

/// Errors that can occur while encoding or saving an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The codec rejected the image
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed {
        format: &'static str,
        reason: String,
    },

    /// The target path does not end in .png, .jpg or .jpeg
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// Writing the file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality); values
///   outside the range are clamped
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &ImageBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);
    let rgb = image.to_rgb_image();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Encode an image to PNG bytes (lossless).
pub fn encode_png(image: &ImageBuffer) -> Result<Vec<u8>, EncodeError> {
    let rgb = image.to_rgb_image();

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Save an image, picking the codec from the file extension.
///
/// `quality` only applies to JPEG output.
pub fn save_image(
    image: &ImageBuffer,
    path: impl AsRef<Path>,
    quality: u8,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let bytes = match extension.as_str() {
        "png" => encode_png(image)?,
        "jpg" | "jpeg" => encode_jpeg(image, quality)?,
        _ => return Err(EncodeError::UnsupportedExtension(extension)),
    };

    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {e}", path.display())))?;
    log::info!("Saved {}", path.display());
    Ok(())
}
