//! Serial framing for the companion link.
//!
//! Each dictionary travels in one frame:
//!
//! ```text
//! 0xA5 | len: u16 LE | payload (len bytes) | xor of payload
//! ```
//!
//! [`FrameDecoder`] is fed one byte at a time from whatever the transport
//! delivers (UART FIFO, simulator injection) and yields a [`LinkEvent`] for
//! every frame that ends: either a verified payload or a drop with its
//! reason. Oversized frames are skipped without buffering so the decoder
//! stays in sync with the stream.

use core::fmt;

use heapless::Vec;

use crate::config::INBOX_SIZE;
use crate::message::{DictError, Dictionary};

/// First byte of every frame.
pub const FRAME_START: u8 = 0xA5;

/// Sent back after a frame was delivered.
pub const ACK: u8 = 0x06;

/// Sent back after a frame was dropped.
pub const NACK: u8 = 0x15;

/// Start byte, two length bytes and the checksum.
pub const FRAME_OVERHEAD: usize = 4;

/// Largest encoded frame the watch accepts.
pub const MAX_FRAME_LEN: usize = INBOX_SIZE + FRAME_OVERHEAD;

// =============================================================================
// Drop Reasons
// =============================================================================

/// Why an inbound frame was not delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Payload larger than the inbox.
    TooLarge,
    /// Checksum mismatch.
    Checksum,
    /// Payload is not a valid dictionary.
    Malformed(DictError),
}

impl DropReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooLarge => "buffer overflow",
            Self::Checksum => "bad checksum",
            Self::Malformed(_) => "malformed dictionary",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{}: {}", self.as_str(), e),
            _ => f.write_str(self.as_str()),
        }
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Outcome of a completed frame.
#[derive(Debug)]
pub enum LinkEvent<'a> {
    /// Checksum matched and the payload parsed as a dictionary.
    Delivered(Dictionary<'a>),
    Dropped(DropReason),
}

impl LinkEvent<'_> {
    /// Acknowledgement byte to send back.
    pub const fn reply(&self) -> u8 {
        match self {
            Self::Delivered(_) => ACK,
            Self::Dropped(_) => NACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecodeState {
    /// Waiting for [`FRAME_START`]; other bytes are line noise.
    Idle,
    LenLow,
    LenHigh(u8),
    Payload { len: usize },
    /// Oversized payload: count the bytes down without storing them.
    Skip { remaining: usize },
    Checksum,
}

/// Incremental frame decoder.
pub struct FrameDecoder {
    state: DecodeState,
    payload: Vec<u8, INBOX_SIZE>,
    checksum: u8,
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Idle,
            payload: Vec::new(),
            checksum: 0,
        }
    }

    /// Feed one byte. Returns an event when a frame ends on this byte.
    ///
    /// A delivered dictionary borrows the decoder's buffer, so it must be
    /// handled before the next byte is pushed.
    pub fn push(
        &mut self,
        byte: u8,
    ) -> Option<LinkEvent<'_>> {
        match self.state {
            DecodeState::Idle => {
                if byte == FRAME_START {
                    self.state = DecodeState::LenLow;
                }
                None
            }
            DecodeState::LenLow => {
                self.state = DecodeState::LenHigh(byte);
                None
            }
            DecodeState::LenHigh(low) => {
                let len = u16::from_le_bytes([low, byte]) as usize;
                self.payload.clear();
                self.checksum = 0;
                self.state = if len > INBOX_SIZE {
                    DecodeState::Skip { remaining: len + 1 }
                } else if len == 0 {
                    DecodeState::Checksum
                } else {
                    DecodeState::Payload { len }
                };
                None
            }
            DecodeState::Payload { len } => {
                // Capacity is checked when the length arrives
                self.payload.push(byte).ok();
                self.checksum ^= byte;
                if self.payload.len() == len {
                    self.state = DecodeState::Checksum;
                }
                None
            }
            DecodeState::Skip { remaining } => {
                if remaining > 1 {
                    self.state = DecodeState::Skip { remaining: remaining - 1 };
                    None
                } else {
                    self.state = DecodeState::Idle;
                    Some(LinkEvent::Dropped(DropReason::TooLarge))
                }
            }
            DecodeState::Checksum => {
                self.state = DecodeState::Idle;
                if byte != self.checksum {
                    return Some(LinkEvent::Dropped(DropReason::Checksum));
                }
                Some(match Dictionary::parse(&self.payload) {
                    Ok(dict) => LinkEvent::Delivered(dict),
                    Err(e) => LinkEvent::Dropped(DropReason::Malformed(e)),
                })
            }
        }
    }

    /// True while no frame is partially received.
    #[inline]
    pub fn is_idle(&self) -> bool { self.state == DecodeState::Idle }

    /// Abandon any partial frame.
    pub fn reset(&mut self) {
        self.state = DecodeState::Idle;
        self.payload.clear();
        self.checksum = 0;
    }
}

impl Default for FrameDecoder {
    fn default() -> Self { Self::new() }
}

/// XOR of all bytes.
pub fn checksum(payload: &[u8]) -> u8 { payload.iter().fold(0, |acc, b| acc ^ b) }

/// Wrap `payload` in a frame. Fails if it does not fit the inbox.
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8, MAX_FRAME_LEN>, DropReason> {
    if payload.len() > INBOX_SIZE {
        return Err(DropReason::TooLarge);
    }
    let len = (payload.len() as u16).to_le_bytes();

    let mut frame = Vec::new();
    // MAX_FRAME_LEN leaves room for the overhead, so these cannot fail
    frame.push(FRAME_START).ok();
    frame.extend_from_slice(&len).ok();
    frame.extend_from_slice(payload).ok();
    frame.push(checksum(payload)).ok();
    Ok(frame)
}

// =============================================================================
// Unit Tests
// =============================================================================
