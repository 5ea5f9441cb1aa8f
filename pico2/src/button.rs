//! Select button debounce.
//!
//! Time is passed in as milliseconds since boot so the edge detection can be
//! exercised on the host.

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Debug, Default)]
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// True once per press, on the falling edge.
    ///
    /// Buttons are active-low, so `is_low` means pressed. Level changes within
    /// [`DEBOUNCE_MS`] of the last accepted change are contact bounce.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change_ms = Some(now_ms);
        is_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(true, 10));
        assert!(!button.just_pressed(true, 500));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut button = ButtonState::new();
        assert!(!button.just_pressed(false, 0));
        assert!(button.just_pressed(true, 100));
        assert!(!button.just_pressed(false, 200));
    }

    #[test]
    fn test_bounce_ignored() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 1000));
        // Contact chatter right after the press
        assert!(!button.just_pressed(false, 1010));
        assert!(!button.just_pressed(true, 1020));
        assert!(!button.just_pressed(false, 1049));
        // Real release, then a second press
        assert!(!button.just_pressed(false, 1100));
        assert!(button.just_pressed(true, 1200));
    }

    #[test]
    fn test_fast_repress_after_debounce() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(false, 50));
        assert!(button.just_pressed(true, 100));
    }
}
