//! Event log ring buffer.
//!
//! The face records what happened (messages received or dropped, hands
//! hidden, outbox results) into a small [`EventLog`]. Platforms drain it:
//! the firmware forwards entries to `defmt`, the simulator shows them on its
//! log page.
//!
//! # Log Levels
//!
//! - `Trace`: dark gray
//! - `Debug`: gray
//! - `Info`: green
//! - `Warn`: yellow
//! - `Error`: red

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GRAY, GREEN, RED, YELLOW};

/// Entries kept before the oldest is dropped.
pub const LOG_ENTRIES: usize = 8;

/// Maximum bytes per message.
pub const LOG_MSG_LEN: usize = 48;

const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => DARK_GRAY,
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// One log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String<LOG_MSG_LEN>,
}

/// `fmt::Write` sink that silently stops at capacity instead of failing,
/// so an overlong message keeps its beginning.
struct Truncating<'a>(&'a mut String<LOG_MSG_LEN>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        crate::weather::push_truncated(self.0, s);
        Ok(())
    }
}

/// Ring buffer of the most recent [`LOG_ENTRIES`] entries.
#[derive(Clone, Debug)]
pub struct EventLog {
    entries: Deque<LogEntry, LOG_ENTRIES>,
    dropped: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            dropped: 0,
        }
    }

    /// Append a plain message.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        self.push_fmt(level, format_args!("{message}"));
    }

    /// Append a formatted message, truncated to [`LOG_MSG_LEN`].
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        let mut message = String::new();
        let _ = Truncating(&mut message).write_fmt(args);

        if self.entries.is_full() {
            self.entries.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        // Room was made above
        self.entries.push_back(LogEntry { level, message }).ok();
    }

    #[inline]
    pub fn info(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Info, message);
    }

    #[inline]
    pub fn error(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Error, message);
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<LogEntry> { self.entries.pop_front() }

    /// Remove every entry, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = LogEntry> + '_ { core::iter::from_fn(move || self.pop()) }

    /// Entries lost to overflow since creation.
    #[inline]
    pub const fn dropped(&self) -> u32 { self.dropped }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
