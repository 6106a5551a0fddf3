//! Editor configuration.
//!
//! All fields have defaults, so a host can deserialize a partial object
//! (for example `{ "jpeg_quality": 80 }`) and get a complete config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transform::{FilterType, RingStyle};

/// Fixed area the render step fits images into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArea {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayArea {
    fn default() -> Self {
        Self {
            width: 750,
            height: 430,
        }
    }
}

/// Settings shared by the pipeline, the renderer and the exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Area previews are scaled into (aspect ratio preserved)
    pub display: DisplayArea,
    /// Colour and thickness of circle annotations
    pub annotation: RingStyle,
    /// Resampling filter for the resize stage
    pub resize_filter: FilterType,
    /// Resampling filter for display scaling
    pub display_filter: FilterType,
    /// JPEG quality for exports (1-100)
    pub jpeg_quality: u8,
    /// Largest width or height an edit may request
    pub max_dimension: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            display: DisplayArea::default(),
            annotation: RingStyle::default(),
            resize_filter: FilterType::Bilinear,
            display_filter: FilterType::Bilinear,
            jpeg_quality: 90,
            max_dimension: 16_384,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::EmptyDisplayArea {
                width: self.display.width,
                height: self.display.height,
            });
        }
        if self.annotation.thickness == 0 {
            return Err(ConfigError::ZeroThickness);
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::JpegQuality(self.jpeg_quality));
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::ZeroMaxDimension);
        }
        Ok(())
    }
}
