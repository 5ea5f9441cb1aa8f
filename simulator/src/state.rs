//! Simulator-side UI state: which page is up and the drained log history.

use std::collections::VecDeque;

use dial_common::LogEntry;

/// Lines kept for the log page; fits the 168px tall window.
pub const HISTORY_LINES: usize = 11;

/// Which page the window shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Face,
    Logs,
}

impl Page {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Logs,
            Self::Logs => Self::Face,
        }
    }
}

/// Log entries drained from the face, newest last.
#[derive(Debug, Default)]
pub struct LogHistory {
    lines: VecDeque<LogEntry>,
    dirty: bool,
}

impl LogHistory {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(HISTORY_LINES),
            dirty: true,
        }
    }

    pub fn extend(
        &mut self,
        entries: impl IntoIterator<Item = LogEntry>,
    ) {
        for entry in entries {
            if self.lines.len() == HISTORY_LINES {
                self.lines.pop_front();
            }
            self.lines.push_back(entry);
            self.dirty = true;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.lines.iter() }

    /// True once after new lines arrive or [`LogHistory::mark_dirty`].
    pub fn take_dirty(&mut self) -> bool { std::mem::take(&mut self.dirty) }

    pub fn mark_dirty(&mut self) { self.dirty = true; }
}
