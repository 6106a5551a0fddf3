//! The apply-edit pipeline.
//!
//! An apply-edit request walks a fixed sequence of stages:
//!
//! ```text
//! Idle -> Validating -> Resizing -> AdjustingBrightness -> Annotating -> Committed
//!            |                                                 |
//!            +------------------> Rejected <-------------------+
//! ```
//!
//! Each stage consumes the previous stage's buffer and produces a new one.
//! Nothing is written to the session until `Committed`, so a rejection at
//! any point (including the annotator's bounds check, after resize and
//! brightness already ran) leaves the session exactly as it was.

use std::fmt;
use std::num::{IntErrorKind, NonZeroU32, ParseIntError};

use serde::{Deserialize, Serialize};

use crate::buffer::ImageBuffer;
use crate::config::EditorConfig;
use crate::error::{ConfigError, EditError, Field};
use crate::session::ImageSession;
use crate::transform::{adjust_brightness, draw_circle, resize, resize_dimensions};

/// Stages of one apply-edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Validating,
    Resizing,
    AdjustingBrightness,
    Annotating,
    Committed,
    Rejected,
}

impl PipelineStage {
    /// Whether the request has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Committed | PipelineStage::Rejected)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Validating => "validating",
            PipelineStage::Resizing => "resizing",
            PipelineStage::AdjustingBrightness => "adjusting brightness",
            PipelineStage::Annotating => "annotating",
            PipelineStage::Committed => "committed",
            PipelineStage::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Raw numeric parameters of an edit. `None` means the field was left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditParameters {
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Brightness reduction, 0 when absent
    pub brightness: Option<i64>,
    pub center_x: Option<i64>,
    pub center_y: Option<i64>,
    pub radius: Option<i64>,
}

impl EditParameters {
    /// The circle, if all three of its fields were supplied.
    pub fn circle(&self) -> Option<CircleSpec> {
        Some(CircleSpec {
            center_x: self.center_x?,
            center_y: self.center_y?,
            radius: self.radius?,
        })
    }
}

/// Centre and radius of a circle annotation, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

/// The free-text fields of an edit form, exactly as typed.
///
/// Empty or whitespace-only text means "not supplied". After a successful
/// [`EditPipeline::apply`] every field is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditRequest {
    pub width: String,
    pub height: String,
    pub brightness: String,
    pub center_x: String,
    pub center_y: String,
    pub radius: String,
}

impl EditRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every field into an integer.
    ///
    /// # Errors
    ///
    /// [`EditError::Parse`] naming the first field that is not an integer.
    /// Integers too large for `i64` are [`EditError::Range`] with the
    /// saturated value. Other ranges are checked by the pipeline.
    pub fn parse(&self) -> Result<EditParameters, EditError> {
        Ok(EditParameters {
            width: parse_field(Field::Width, &self.width)?,
            height: parse_field(Field::Height, &self.height)?,
            brightness: parse_field(Field::Brightness, &self.brightness)?,
            center_x: parse_field(Field::CenterX, &self.center_x)?,
            center_y: parse_field(Field::CenterY, &self.center_y)?,
            radius: parse_field(Field::Radius, &self.radius)?,
        })
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_field(field: Field, text: &str) -> Result<Option<i64>, EditError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => EditError::range(field, i64::MAX, too_large(field)),
            IntErrorKind::NegOverflow => EditError::range(field, i64::MIN, too_small(field)),
            _ => EditError::Parse {
                field,
                input: text.to_string(),
            },
        })
}

/// Reason for an integer too large to represent, by field.
fn too_large(field: Field) -> &'static str {
    match field {
        Field::Width | Field::Height => MAX_DIMENSION_REASON,
        Field::Brightness => BRIGHTNESS_REASON,
        Field::CenterX | Field::CenterY | Field::Radius => "lies outside the image",
    }
}

/// Reason for an integer too small to represent, by field.
fn too_small(field: Field) -> &'static str {
    match field {
        Field::Width | Field::Height | Field::Radius => POSITIVE_REASON,
        Field::Brightness => BRIGHTNESS_REASON,
        Field::CenterX | Field::CenterY => "lies outside the image",
    }
}

/// Parameters that passed validation, in the types the stages take.
#[derive(Debug)]
struct ValidatedEdit {
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
    brightness: u8,
    circle: Option<CircleSpec>,
}

/// Runs apply-edit requests against a session.
#[derive(Debug, Clone, Default)]
pub struct EditPipeline {
    config: EditorConfig,
}

impl EditPipeline {
    /// Create a pipeline with a validated config.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Parse a free-text request and apply it.
    ///
    /// On success the request fields are cleared. On failure both the
    /// session and the request are left untouched.
    pub fn apply(
        &self,
        session: &mut ImageSession,
        request: &mut EditRequest,
    ) -> Result<ImageBuffer, EditError> {
        if !session.is_loaded() {
            return Err(reject(PipelineStage::Validating, EditError::NoImageLoaded));
        }
        let params = request
            .parse()
            .map_err(|e| reject(PipelineStage::Validating, e))?;

        let result = self.apply_edit(session, &params)?;
        request.clear();
        Ok(result)
    }

    /// Validate `params`, run every stage on the session's current image and
    /// commit the result. Returns the new current image.
    pub fn apply_edit(
        &self,
        session: &mut ImageSession,
        params: &EditParameters,
    ) -> Result<ImageBuffer, EditError> {
        let current = session
            .current()
            .ok_or_else(|| reject(PipelineStage::Validating, EditError::NoImageLoaded))?;

        let output = self.run(current, params)?;
        session.commit(output.clone())?;

        log::debug!("apply-edit: {}", PipelineStage::Committed);
        Ok(output)
    }

    /// Run the stages on `image` without touching any session.
    pub fn run(
        &self,
        image: &ImageBuffer,
        params: &EditParameters,
    ) -> Result<ImageBuffer, EditError> {
        enter(PipelineStage::Validating);
        let edit = self
            .validate(image, params)
            .map_err(|e| reject(PipelineStage::Validating, e))?;

        enter(PipelineStage::Resizing);
        let resized = resize(
            image,
            edit.width,
            edit.height,
            self.config.resize_filter,
        );

        enter(PipelineStage::AdjustingBrightness);
        let adjusted = adjust_brightness(&resized, edit.brightness);

        enter(PipelineStage::Annotating);
        match edit.circle {
            Some(c) => draw_circle(
                &adjusted,
                c.center_x,
                c.center_y,
                c.radius,
                &self.config.annotation,
            )
            .map_err(|e| reject(PipelineStage::Annotating, e)),
            None => {
                if params.center_x.is_some()
                    || params.center_y.is_some()
                    || params.radius.is_some()
                {
                    log::debug!("apply-edit: circle fields incomplete, skipping annotation");
                }
                Ok(adjusted)
            }
        }
    }

    fn validate(
        &self,
        image: &ImageBuffer,
        params: &EditParameters,
    ) -> Result<ValidatedEdit, EditError> {
        let width = self.dimension(Field::Width, params.width)?;
        let height = self.dimension(Field::Height, params.height)?;

        if let Some(radius) = params.radius {
            if radius <= 0 {
                return Err(EditError::range(Field::Radius, radius, POSITIVE_REASON));
            }
        }

        let brightness = match params.brightness {
            None => 0,
            Some(value) => u8::try_from(value).map_err(|_| {
                EditError::range(Field::Brightness, value, BRIGHTNESS_REASON)
            })?,
        };

        // A single supplied side can still derive an oversized other side
        let (out_w, out_h) =
            resize_dimensions(image.width(), image.height(), width, height);
        self.check_max(Field::Width, out_w)?;
        self.check_max(Field::Height, out_h)?;

        Ok(ValidatedEdit {
            width,
            height,
            brightness,
            circle: params.circle(),
        })
    }

    fn dimension(
        &self,
        field: Field,
        value: Option<i64>,
    ) -> Result<Option<NonZeroU32>, EditError> {
        let Some(value) = value else {
            return Ok(None);
        };
        if value <= 0 {
            return Err(EditError::range(field, value, POSITIVE_REASON));
        }
        let side = u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| EditError::range(field, value, MAX_DIMENSION_REASON))?;
        self.check_max(field, side.get())?;
        Ok(Some(side))
    }

    fn check_max(&self, field: Field, side: u32) -> Result<(), EditError> {
        if side > self.config.max_dimension {
            return Err(EditError::range(field, side as i64, MAX_DIMENSION_REASON));
        }
        Ok(())
    }
}

const MAX_DIMENSION_REASON: &str = "exceeds the maximum edit dimension";
const POSITIVE_REASON: &str = "must be positive";
const BRIGHTNESS_REASON: &str = "must be between 0 and 255";

fn enter(stage: PipelineStage) {
    log::debug!("apply-edit: {stage}");
}

fn reject(stage: PipelineStage, err: EditError) -> EditError {
    log::warn!(
        "apply-edit {} while {stage}: {err}",
        PipelineStage::Rejected
    );
    err
}

/// Apply `params` to the session with the default configuration.
pub fn apply_edit(
    session: &mut ImageSession,
    params: &EditParameters,
) -> Result<ImageBuffer, EditError> {
    EditPipeline::default().apply_edit(session, params)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: an invalid width never changes the session.
        #[test]
        fn prop_invalid_width_is_atomic(
            width in i64::MIN..=0,
            brightness in 0i64..=255,
        ) {
            let mut session = ImageSession::new();
            session.load(ImageBuffer::filled(8, 6, [10, 20, 30]).unwrap());
            let before = session.current().unwrap().clone();

            let params = EditParameters {
                width: Some(width),
                brightness: Some(brightness),
                ..Default::default()
            };
            let result = apply_edit(&mut session, &params);

            prop_assert!(
                matches!(result, Err(EditError::Range { field: Field::Width, .. })),
                "expected a width range error"
            );
            prop_assert_eq!(session.current(), Some(&before));
        }

        /// Property: revert after any run of valid edits restores the load.
        #[test]
        fn prop_revert_restores_exactly(
            edits in proptest::collection::vec((1i64..=40, 0i64..=255), 1..4),
        ) {
            let mut session = ImageSession::new();
            let pixels = (0..16 * 12 * 3).map(|i| (i * 7 % 256) as u8).collect();
            let loaded = ImageBuffer::new(16, 12, pixels).unwrap();
            session.load(loaded.clone());

            for (width, brightness) in edits {
                let params = EditParameters {
                    width: Some(width),
                    brightness: Some(brightness),
                    ..Default::default()
                };
                prop_assert!(apply_edit(&mut session, &params).is_ok());
            }

            let reverted = session.revert().unwrap().clone();
            prop_assert_eq!(&reverted, &loaded);
            prop_assert_eq!(session.revert().unwrap(), &loaded);
        }
    }
}
