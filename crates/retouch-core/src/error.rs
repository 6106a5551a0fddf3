//! Error types shared by the editing pipeline and the session.
//!
//! Every variant is a local validation failure. Nothing here represents a
//! partially applied edit: when an [`EditError`] is returned the session is
//! exactly as it was before the call.

use std::fmt;

use thiserror::Error;

/// The user-editable numeric fields of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    Brightness,
    CenterX,
    CenterY,
    Radius,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Brightness => "brightness",
            Field::CenterX => "circle center X",
            Field::CenterY => "circle center Y",
            Field::Radius => "circle radius",
        };
        f.write_str(name)
    }
}

/// Errors raised while validating or running an apply-edit request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A numeric field holds text that is not an integer.
    #[error("Invalid {field}: '{input}' is not an integer")]
    Parse { field: Field, input: String },

    /// A numeric field is outside its legal range.
    #[error("Invalid {field}: {value} {reason}")]
    Range {
        field: Field,
        value: i64,
        reason: &'static str,
    },

    /// The circle does not fit inside the image.
    #[error(
        "Circle at ({center_x}, {center_y}) with radius {radius} does not fit inside the {width}x{height} image"
    )]
    OutOfBounds {
        center_x: i64,
        center_y: i64,
        radius: i64,
        width: u32,
        height: u32,
    },

    /// An edit or revert was requested before any image was loaded.
    #[error("No image loaded")]
    NoImageLoaded,
}

impl EditError {
    pub(crate) fn range(field: Field, value: i64, reason: &'static str) -> Self {
        EditError::Range {
            field,
            value,
            reason,
        }
    }
}

/// Errors raised when constructing an [`ImageBuffer`](crate::ImageBuffer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sample count does not match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Errors raised by a [`FrameSource`](crate::capture::FrameSource).
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No camera device could be opened.
    #[error("Camera unavailable: {0}")]
    DeviceUnavailable(String),

    /// The device is open but did not deliver a frame.
    #[error("Failed to read frame: {0}")]
    ReadFailed(String),

    /// The device delivered a frame that is not a valid image buffer.
    #[error("Invalid frame: {0}")]
    InvalidFrame(#[from] BufferError),
}

/// Errors raised by [`EditorConfig::validate`](crate::EditorConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Display area must be non-zero, got {width}x{height}")]
    EmptyDisplayArea { width: u32, height: u32 },

    #[error("Annotation thickness must be at least 1 pixel")]
    ZeroThickness,

    #[error("JPEG quality must be in 1..=100, got {0}")]
    JpegQuality(u8),

    #[error("Maximum edit dimension must be non-zero")]
    ZeroMaxDimension,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = EditError::Parse {
            field: Field::Width,
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid width: 'abc' is not an integer");
    }

    #[test]
    fn test_range_error_display() {
        let err = EditError::range(Field::Brightness, 300, "must be between 0 and 255");
        assert_eq!(
            err.to_string(),
            "Invalid brightness: 300 must be between 0 and 255"
        );
    }

    #[test]
    fn test_out_of_bounds_display_names_geometry() {
        let err = EditError::OutOfBounds {
            center_x: 10,
            center_y: 10,
            radius: 20,
            width: 100,
            height: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("(10, 10)"));
        assert!(msg.contains("radius 20"));
        assert!(msg.contains("100x100"));
    }

    #[test]
    fn test_capture_error_from_buffer_error() {
        let err: CaptureError = BufferError::InvalidDimensions {
            width: 0,
            height: 4,
        }
        .into();
        assert!(matches!(err, CaptureError::InvalidFrame(_)));
    }
}
