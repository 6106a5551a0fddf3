//! PNG/JPEG decoding with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};

use super::{DecodeError, Orientation};
use crate::buffer::ImageBuffer;

/// Decode a PNG or JPEG image from bytes, applying EXIF orientation.
///
/// # Returns
///
/// An [`ImageBuffer`] in native BGR order with the orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are neither PNG nor JPEG.
/// Returns `DecodeError::CorruptedFile` if the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Png | ImageFormat::Jpeg) => {}
        _ => return Err(DecodeError::InvalidFormat),
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, extract_orientation(bytes));

    ImageBuffer::from_rgb_image(oriented.into_rgb8())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file cannot be read, otherwise the
/// errors of [`decode_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<ImageBuffer, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {e}", path.display())))?;
    let image = decode_image(&bytes)?;
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_jpeg, encode_png};

    fn two_pixel_image() -> ImageBuffer {
        // Red then green, native BGR
        ImageBuffer::new(2, 1, vec![0, 0, 255, 0, 255, 0]).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let original = two_pixel_image();
        let bytes = encode_png(&original).unwrap();

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_jpeg() {
        let original = ImageBuffer::filled(16, 8, [40, 80, 160]).unwrap();
        let bytes = encode_jpeg(&original, 95).unwrap();

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
        // Lossy, but a flat colour survives closely
        let px = decoded.pixel(4, 4).unwrap();
        assert!((px[2] as i32 - 160).abs() <= 4, "red sample {}", px[2]);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = encode_png(&two_pixel_image()).unwrap();
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image("/definitely/not/here.png");
        assert!(matches!(result, Err(DecodeError::IoError(_))));
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        let bytes = encode_png(&two_pixel_image()).unwrap();
        assert_eq!(get_orientation(&bytes), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let img = DynamicImage::ImageRgb8(two_pixel_image().to_rgb_image());

        // Rotate 90 CW should make it 1x2 (vertical)
        let result = apply_orientation(img, Orientation::Rotate90CW).into_rgb8();
        assert_eq!(result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let img = DynamicImage::ImageRgb8(two_pixel_image().to_rgb_image());

        let result = apply_orientation(img, Orientation::FlipHorizontal);
        let result = result.into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]); // Green
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]); // Red
    }
}
