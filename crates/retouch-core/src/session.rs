//! The editing session: one original snapshot and one working copy.

use crate::buffer::ImageBuffer;
use crate::capture::FrameSource;
use crate::error::{CaptureError, EditError};
use crate::transform::ChannelSelector;

/// Holds the image being edited.
///
/// - `original` is set by [`load`](Self::load) or [`capture`](Self::capture)
///   and never changed by edits.
/// - `current` is the working copy that edits replace wholesale.
///
/// Both are `None` until the first load; after that both are always `Some`.
#[derive(Debug, Clone, Default)]
pub struct ImageSession {
    original: Option<ImageBuffer>,
    current: Option<ImageBuffer>,
}

impl ImageSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `buffer`: it becomes both the original and the current
    /// image, as independent copies.
    pub fn load(&mut self, buffer: ImageBuffer) -> &ImageBuffer {
        log::info!(
            "Session loaded {}x{} image",
            buffer.width(),
            buffer.height()
        );
        self.original = Some(buffer.clone());
        self.current.insert(buffer)
    }

    /// Pull one frame from `source` and [`load`](Self::load) it.
    ///
    /// On failure the session is unchanged.
    pub fn capture<S>(&mut self, source: &mut S) -> Result<&ImageBuffer, CaptureError>
    where
        S: FrameSource + ?Sized,
    {
        let frame = source.capture_frame()?;
        Ok(self.load(frame))
    }

    /// Discard all edits by copying the original back into current.
    pub fn revert(&mut self) -> Result<&ImageBuffer, EditError> {
        let original = self.original.as_ref().ok_or(EditError::NoImageLoaded)?;
        log::info!("Session reverted to original");
        Ok(self.current.insert(original.clone()))
    }

    /// Replace the current image with an edit result.
    ///
    /// The original is untouched. Fails if nothing was ever loaded, so the
    /// session cannot end up with a current image but no original.
    pub fn commit(&mut self, buffer: ImageBuffer) -> Result<&ImageBuffer, EditError> {
        if self.original.is_none() {
            return Err(EditError::NoImageLoaded);
        }
        log::info!(
            "Session committed {}x{} image",
            buffer.width(),
            buffer.height()
        );
        Ok(self.current.insert(buffer))
    }

    /// A display copy of the current image with `selector` applied.
    ///
    /// Never mutates the session.
    pub fn preview(&self, selector: ChannelSelector) -> Option<ImageBuffer> {
        self.current.as_ref().map(|image| selector.apply(image))
    }

    pub fn current(&self) -> Option<&ImageBuffer> {
        self.current.as_ref()
    }

    pub fn original(&self) -> Option<&ImageBuffer> {
        self.original.as_ref()
    }

    /// Whether an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }
}
