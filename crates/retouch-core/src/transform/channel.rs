//! Single-channel isolation for previews.
//!
//! Channel isolation is display-only. The session never stores its output,
//! so switching the selector back to [`ChannelSelector::All`] always shows
//! the true current image.

use serde::{Deserialize, Serialize};

use crate::buffer::{ImageBuffer, CHANNELS};

/// One of the three native (BGR) channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Index 0
    Blue,
    /// Index 1
    Green,
    /// Index 2
    Red,
}

impl Channel {
    /// Position of this channel within a native pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }

    /// Channel at a native pixel index, if valid.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Channel::Blue),
            1 => Some(Channel::Green),
            2 => Some(Channel::Red),
            _ => None,
        }
    }
}

/// Which channels a preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelSelector {
    #[default]
    All,
    Only(Channel),
}

impl ChannelSelector {
    /// The isolated channel, or `None` for [`ChannelSelector::All`].
    pub fn channel(self) -> Option<Channel> {
        match self {
            ChannelSelector::All => None,
            ChannelSelector::Only(channel) => Some(channel),
        }
    }

    /// Apply the selector to an image, returning a new buffer.
    pub fn apply(self, image: &ImageBuffer) -> ImageBuffer {
        match self {
            ChannelSelector::All => image.clone(),
            ChannelSelector::Only(channel) => extract_channel(image, channel),
        }
    }
}

impl From<Channel> for ChannelSelector {
    fn from(channel: Channel) -> Self {
        ChannelSelector::Only(channel)
    }
}

/// Zero every sample outside `channel`, copying the selected one verbatim.
pub fn extract_channel(image: &ImageBuffer, channel: Channel) -> ImageBuffer {
    let mut out = image.clone();
    let keep = channel.index();
    for px in out.pixels_mut().chunks_exact_mut(CHANNELS) {
        for (i, sample) in px.iter_mut().enumerate() {
            if i != keep {
                *sample = 0;
            }
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = ImageBuffer> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |pixels| ImageBuffer::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: channel 2 survives verbatim, channels 0 and 1 are zero.
        #[test]
        fn prop_isolates_channel_two(img in image_strategy()) {
            let out = extract_channel(&img, Channel::Red);
            prop_assert_eq!(out.dimensions(), img.dimensions());
            for (src, dst) in img.pixels().chunks_exact(3).zip(out.pixels().chunks_exact(3)) {
                prop_assert_eq!(dst[0], 0);
                prop_assert_eq!(dst[1], 0);
                prop_assert_eq!(dst[2], src[2]);
            }
        }
    }
}
