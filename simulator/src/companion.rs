//! Fake companion phone.
//!
//! Builds the same framed dictionaries a phone bridge would send and queues
//! their bytes for the main loop to feed through the watch's frame decoder,
//! one byte at a time, exactly like the UART path on hardware.

use std::collections::VecDeque;

use dial_common::config::{INBOX_SIZE, KEY_ICON, KEY_TEMPERATURE};
use dial_common::link::{FRAME_START, checksum};
use dial_common::{ACK, DictError, DictionaryBuilder, IconCategory, encode_frame};

/// Temperatures cycled through by successive reports.
const TEMPERATURES: [i32; 6] = [72, 58, -4, 31, 100, 12];

/// Frames accepted and rejected by the watch, as seen from the phone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkStats {
    pub frames_sent: u32,
    pub acked: u32,
    pub nacked: u32,
}

pub struct Companion {
    tx: VecDeque<u8>,
    next_temperature: usize,
    next_category: usize,
    online: bool,
    stats: LinkStats,
}

impl Companion {
    pub fn new() -> Self {
        Self {
            tx: VecDeque::new(),
            next_temperature: 0,
            next_category: 0,
            online: true,
            stats: LinkStats::default(),
        }
    }

    /// Full report for the next category in [`IconCategory::ALL`], with the
    /// next temperature in the cycle.
    pub fn send_next_report(&mut self) -> Result<(), DictError> {
        let category = IconCategory::ALL[self.next_category % IconCategory::ALL.len()];
        self.next_category += 1;
        self.send_raw_report(category.code())
    }

    /// Full report with an arbitrary category string.
    pub fn send_raw_report(
        &mut self,
        category: &str,
    ) -> Result<(), DictError> {
        let temperature = self.take_temperature();
        let mut dict: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        dict.write_int(KEY_TEMPERATURE, temperature)?
            .write_cstring(KEY_ICON, category)?;
        self.queue(dict.as_bytes(), false)
    }

    /// Report carrying only the temperature, as a decimal string.
    pub fn send_temperature_only(&mut self) -> Result<(), DictError> {
        let temperature = self.take_temperature();
        let mut dict: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        dict.write_cstring(KEY_TEMPERATURE, &format!("{temperature}.5"))?;
        self.queue(dict.as_bytes(), false)
    }

    /// Valid report with a flipped checksum byte.
    pub fn send_corrupted(&mut self) -> Result<(), DictError> {
        let mut dict: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        dict.write_int(KEY_TEMPERATURE, 0)?
            .write_cstring(KEY_ICON, IconCategory::Fog.code())?;
        self.queue(dict.as_bytes(), true)
    }

    /// Frame whose declared payload is larger than the watch inbox.
    pub fn send_oversized(&mut self) {
        let payload = [b'x'; INBOX_SIZE * 2];
        self.tx.push_back(FRAME_START);
        self.tx.extend((payload.len() as u16).to_le_bytes());
        self.tx.extend(payload);
        self.tx.push_back(checksum(&payload));
        self.stats.frames_sent += 1;
    }

    fn queue(
        &mut self,
        payload: &[u8],
        corrupt: bool,
    ) -> Result<(), DictError> {
        let mut frame = encode_frame(payload).map_err(|_| DictError::Overflow)?;
        if corrupt && let Some(last) = frame.last_mut() {
            *last ^= 0xFF;
        }
        self.tx.extend(frame.iter().copied());
        self.stats.frames_sent += 1;
        Ok(())
    }

    fn take_temperature(&mut self) -> i32 {
        let t = TEMPERATURES[self.next_temperature % TEMPERATURES.len()];
        self.next_temperature += 1;
        t
    }

    /// Next byte on the wire, if any.
    pub fn next_byte(&mut self) -> Option<u8> { self.tx.pop_front() }

    /// Hand an ack byte back to the phone. Returns whether the write went
    /// through; it fails while the phone is offline.
    pub fn receive_reply(
        &mut self,
        reply: u8,
    ) -> bool {
        if !self.online {
            return false;
        }
        if reply == ACK {
            self.stats.acked += 1;
        } else {
            self.stats.nacked += 1;
        }
        true
    }

    /// Toggle whether acks reach the phone. Returns the new state.
    pub fn toggle_online(&mut self) -> bool {
        self.online = !self.online;
        self.online
    }

    pub const fn is_online(&self) -> bool { self.online }

    pub const fn stats(&self) -> LinkStats { self.stats }
}
