//! Image transformation operations.
//!
//! Every operation is pure: it borrows its input and returns a new
//! [`ImageBuffer`](crate::ImageBuffer), so a failed stage can never leave a
//! half-edited image behind.
//!
//! # Edit Order
//!
//! The edit pipeline applies these in a fixed order:
//! 1. Resize
//! 2. Brightness reduction
//! 3. Circle annotation
//!
//! Channel isolation is not part of an edit; it is a preview filter.
//!
//! # Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner
//! - Samples in native BGR order

mod annotate;
mod brightness;
mod channel;
mod resize;

pub use annotate::{draw_circle, RingStyle};
pub use brightness::adjust_brightness;
pub use channel::{extract_channel, Channel, ChannelSelector};
pub use resize::{fit_dimensions, resize, resize_dimensions, FilterType};

pub(crate) use resize::resize_exact;
