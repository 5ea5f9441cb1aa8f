//! Hands visibility timer.
//!
//! A select press hides the hands and schedules them to reappear
//! [`HANDS_HIDDEN_MS`] later. There is only ever one pending deadline: a new
//! press replaces it, so the hands come back exactly that long after the
//! *last* press.
//!
//! Time is passed in as milliseconds from any monotonic source. The platform
//! loop calls [`HandsVisibility::poll`] with the current time; the simulator
//! uses `std::time::Instant` and the firmware uses `embassy_time::Instant`.

use crate::config::HANDS_HIDDEN_MS;

/// Result of a press or a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    /// Hands were visible and are now hidden.
    Hidden,
    /// Hands were hidden and are now visible again.
    Shown,
    /// Nothing observable changed (a rearm while already hidden, or no
    /// deadline reached yet).
    None,
}

/// Visibility state with a single reveal deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandsVisibility {
    reveal_at: Option<u64>,
}

impl HandsVisibility {
    /// Hands visible, no timer armed.
    pub const fn new() -> Self { Self { reveal_at: None } }

    /// Handle a select press at `now_ms`: hide and (re)arm the reveal timer.
    pub fn on_select(
        &mut self,
        now_ms: u64,
    ) -> VisibilityChange {
        let was_hidden = self.is_hidden();
        // Cancel-and-rearm: any pending deadline is simply overwritten
        self.reveal_at = Some(now_ms.saturating_add(HANDS_HIDDEN_MS));
        if was_hidden { VisibilityChange::None } else { VisibilityChange::Hidden }
    }

    /// Fire the timer if its deadline has passed.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> VisibilityChange {
        match self.reveal_at {
            Some(deadline) if now_ms >= deadline => {
                self.reveal_at = None;
                VisibilityChange::Shown
            }
            _ => VisibilityChange::None,
        }
    }

    #[inline]
    pub const fn is_hidden(&self) -> bool { self.reveal_at.is_some() }
}

// =============================================================================
// Unit Tests
// =============================================================================
