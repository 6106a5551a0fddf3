//! The in-memory raster every pipeline stage consumes and produces.

use image::RgbImage;

use crate::error::BufferError;

/// Number of samples per pixel.
pub const CHANNELS: usize = 3;

/// A height x width x 3 raster of 8-bit samples in row-major order.
///
/// # Channel Order
///
/// Samples are stored **BGR**: index 0 is blue, 1 is green and 2 is red.
/// Brightness and annotation math operate on this native order; conversion
/// to RGB happens only at the codec and display boundaries
/// ([`ImageBuffer::from_rgb_image`], [`ImageBuffer::to_rgb_image`]).
///
/// # Invariant
///
/// Width and height are non-zero and the sample count is exactly
/// `width * height * 3`. Every constructor checks this, so the fields stay
/// private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer from BGR samples.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = Self::expected_len(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel has the given BGR value.
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Result<Self, BufferError> {
        let len = Self::expected_len(width, height)?;
        let pixels = bgr.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from an RGB image, reordering samples to BGR.
    pub fn from_rgb_image(img: RgbImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        let mut pixels = img.into_raw();
        swap_red_blue(&mut pixels);
        Self::new(width, height, pixels)
    }

    /// Create a buffer from tightly packed RGB samples.
    pub fn from_rgb(width: u32, height: u32, mut rgb: Vec<u8>) -> Result<Self, BufferError> {
        swap_red_blue(&mut rgb);
        Self::new(width, height, rgb)
    }

    /// Create a buffer from tightly packed RGBA samples, dropping alpha.
    ///
    /// Browser canvases and most camera APIs hand frames over in this layout.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, BufferError> {
        let expected = Self::expected_len(width, height)? / CHANNELS * 4;
        if rgba.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: rgba.len(),
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert to an RGB image for encoding or display.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut img = self.to_raster();
        swap_red_blue(&mut img);
        img
    }

    /// Wrap the native samples in an `image` container without reordering.
    ///
    /// Resampling treats channels independently, so the order is irrelevant
    /// there and the swap can be skipped.
    pub(crate) fn to_raster(&self) -> RgbImage {
        // Sample count matches the dimensions by construction
        RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_default()
    }

    /// Inverse of [`ImageBuffer::to_raster`]. Callers guarantee non-zero
    /// dimensions.
    pub(crate) fn from_raster(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        debug_assert!(width > 0 && height > 0, "Empty raster");
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// BGR samples in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// BGR value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the sample buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    fn expected_len(width: u32, height: u32) -> Result<usize, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        Ok(width as usize * height as usize * CHANNELS)
    }
}

/// Swap samples 0 and 2 of every pixel (RGB <-> BGR).
fn swap_red_blue(samples: &mut [u8]) {
    for px in samples.chunks_exact_mut(CHANNELS) {
        px.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let img = ImageBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            ImageBuffer::new(0, 10, vec![]),
            Err(BufferError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(ImageBuffer::filled(10, 0, [0, 0, 0]).is_err());
    }

    #[test]
    fn test_sample_count_mismatch_rejected() {
        let err = ImageBuffer::new(2, 2, vec![0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidPixelData {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_filled() {
        let img = ImageBuffer::filled(3, 2, [1, 2, 3]).unwrap();
        let expected = [1u8, 2, 3].repeat(6);
        assert_eq!(img.pixels(), &expected[..]);
    }

    #[test]
    fn test_rgb_round_trip_swaps_order() {
        let rgb = RgbImage::from_raw(1, 1, vec![255, 10, 0]).unwrap();
        let img = ImageBuffer::from_rgb_image(rgb).unwrap();

        // Red lands in the last native slot
        assert_eq!(img.pixel(0, 0), Some([0, 10, 255]));
        assert_eq!(img.to_rgb_image().get_pixel(0, 0).0, [255, 10, 0]);
    }

    #[test]
    fn test_from_rgb_samples() {
        let img = ImageBuffer::from_rgb(2, 1, vec![9, 8, 7, 1, 2, 3]).unwrap();
        assert_eq!(img.pixels(), &[7u8, 8, 9, 3, 2, 1]);
        assert!(ImageBuffer::from_rgb(2, 1, vec![0; 5]).is_err());
    }

    #[test]
    fn test_from_rgba_drops_alpha() {
        let rgba = [255, 0, 0, 128, 0, 0, 255, 255];
        let img = ImageBuffer::from_rgba(2, 1, &rgba).unwrap();

        assert_eq!(img.pixel(0, 0), Some([0, 0, 255]));
        assert_eq!(img.pixel(1, 0), Some([255, 0, 0]));
    }

    #[test]
    fn test_from_rgba_length_mismatch() {
        assert!(ImageBuffer::from_rgba(2, 2, &[0u8; 12]).is_err());
    }

    #[test]
    fn test_pixel_out_of_range() {
        let img = ImageBuffer::filled(4, 4, [0, 0, 0]).unwrap();
        assert_eq!(img.pixel(4, 0), None);
        assert_eq!(img.pixel(0, 4), None);
    }

    #[test]
    fn test_raster_keeps_native_order() {
        let img = ImageBuffer::new(1, 1, vec![1, 2, 3]).unwrap();
        let raster = img.to_raster();
        assert_eq!(raster.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(ImageBuffer::from_raster(raster), img);
    }

    #[test]
    fn test_raster_keeps_dimensions() {
        let img = ImageBuffer::filled(3, 2, [7, 8, 9]).unwrap();
        let raster = img.to_raster();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.get_pixel(2, 1).0, [7, 8, 9]);
        assert_eq!(raster.as_raw(), img.pixels());
    }
}
