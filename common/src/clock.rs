//! Wall-clock time as the face sees it, plus minute-boundary detection.
//!
//! The platforms own the actual clock (local time on the desktop, a boot
//! offset plus uptime on the Pico). They hand a [`ClockTime`] to the face and
//! use [`MinuteTicker`] to turn their polling loop into once-per-minute ticks.

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hour and minute of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time, rejecting out-of-range fields.
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Time reached `minutes` after midnight, wrapping past the end of the day.
    pub const fn from_minutes_of_day(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes_of_day(self) -> u32 { self.hour as u32 * 60 + self.minute as u32 }

    /// This time advanced by `elapsed_ms`, wrapping past midnight.
    pub const fn advanced_by_ms(
        self,
        elapsed_ms: u64,
    ) -> Self {
        let elapsed_min = (elapsed_ms / 60_000) % MINUTES_PER_DAY as u64;
        Self::from_minutes_of_day(self.minutes_of_day() + elapsed_min as u32)
    }

    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(self) -> u8 { self.minute }
}

/// Fires once each time the observed minute changes.
#[derive(Debug, Default)]
pub struct MinuteTicker {
    last: Option<ClockTime>,
}

impl MinuteTicker {
    pub const fn new() -> Self { Self { last: None } }

    /// Feed the current time. Returns true on the first call and whenever the
    /// time differs from the last observed one.
    pub fn observe(
        &mut self,
        now: ClockTime,
    ) -> bool {
        if self.last == Some(now) {
            return false;
        }
        self.last = Some(now);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(ClockTime::new(0, 0).is_some());
        assert!(ClockTime::new(23, 59).is_some());
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(12, 60).is_none());
    }

    #[test]
    fn test_minutes_of_day_roundtrip_boundaries() {
        assert_eq!(ClockTime::from_minutes_of_day(0), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::from_minutes_of_day(MINUTES_PER_DAY - 1), ClockTime::new(23, 59).unwrap());
        assert_eq!(ClockTime::from_minutes_of_day(MINUTES_PER_DAY + 61), ClockTime::new(1, 1).unwrap());
    }

    #[test]
    fn test_advanced_by_ms_wraps_midnight() {
        let t = ClockTime::new(23, 58).unwrap();
        assert_eq!(t.advanced_by_ms(59_999), t);
        assert_eq!(t.advanced_by_ms(60_000), ClockTime::new(23, 59).unwrap());
        assert_eq!(t.advanced_by_ms(3 * 60_000), ClockTime::new(0, 1).unwrap());
    }

    #[test]
    fn test_minute_ticker_fires_on_change_only() {
        let mut ticker = MinuteTicker::new();
        let t = ClockTime::new(10, 10).unwrap();
        assert!(ticker.observe(t));
        assert!(!ticker.observe(t));
        assert!(ticker.observe(ClockTime::new(10, 11).unwrap()));
        assert!(!ticker.observe(ClockTime::new(10, 11).unwrap()));
    }
}
