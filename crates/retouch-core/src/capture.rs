//! Camera frame acquisition seam.
//!
//! The core never talks to a device. Hosts implement [`FrameSource`] over
//! whatever camera API they have and hand it to
//! [`ImageSession::capture`](crate::ImageSession::capture). A live preview
//! (frames shown on a timer without being captured) stays on the host side
//! and never touches the session.

use crate::buffer::ImageBuffer;
use crate::error::CaptureError;

/// Something that can deliver one camera frame on request.
pub trait FrameSource {
    /// Read the next frame.
    fn capture_frame(&mut self) -> Result<ImageBuffer, CaptureError>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> Result<ImageBuffer, CaptureError>,
{
    fn capture_frame(&mut self) -> Result<ImageBuffer, CaptureError> {
        self()
    }
}
