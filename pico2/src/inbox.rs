//! Messages handed from the UART link task to the render loop.
//!
//! A decoded [`LinkEvent`] borrows the decoder's buffer, so delivered
//! dictionaries are copied out as owned bytes before they cross the channel
//! and re-parsed on the render side.

use dial_common::config::INBOX_SIZE;
use dial_common::{Dictionary, DropReason, LinkEvent, WatchFace};
use dial_common::icons::IconStore;
use heapless::Vec;

/// Owned copy of a delivered dictionary.
pub type Payload = Vec<u8, INBOX_SIZE>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkMessage {
    /// A frame passed its checksum and parsed.
    Delivered(Payload),
    /// A frame was rejected by the decoder.
    Dropped(DropReason),
    /// The acknowledgement byte went out.
    OutboxSent,
    /// The acknowledgement byte could not be written.
    OutboxFailed,
}

impl LinkMessage {
    pub fn from_event(event: &LinkEvent<'_>) -> Self {
        match event {
            LinkEvent::Delivered(dict) => match Vec::from_slice(dict.as_bytes()) {
                Ok(payload) => Self::Delivered(payload),
                Err(_) => Self::Dropped(DropReason::TooLarge),
            },
            LinkEvent::Dropped(reason) => Self::Dropped(*reason),
        }
    }

    /// Outcome of writing an acknowledgement byte.
    pub const fn outbox(sent: bool) -> Self {
        if sent { Self::OutboxSent } else { Self::OutboxFailed }
    }

    /// Apply this message to the watch face.
    pub fn dispatch<S: IconStore>(
        &self,
        face: &mut WatchFace<S>,
    ) {
        match self {
            Self::Delivered(payload) => match Dictionary::parse(payload) {
                Ok(dict) => {
                    face.on_inbox_received(&dict);
                }
                Err(e) => face.on_inbox_dropped(DropReason::Malformed(e)),
            },
            Self::Dropped(reason) => face.on_inbox_dropped(*reason),
            Self::OutboxSent => face.on_outbox_sent(),
            Self::OutboxFailed => face.on_outbox_failed(),
        }
    }
}
