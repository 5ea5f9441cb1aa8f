//! Board and timing configuration for the Pimoroni PIM715 Display Pack 2.8".
//!
//! Pin mapping for PIM715:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Button A (select): GPIO12, active-low
//!
//! The companion bridge talks on UART0 (TX GPIO0, RX GPIO1).

use dial_common::ClockTime;
use dial_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Panel
// =============================================================================

/// Panel width in landscape orientation.
pub const PANEL_WIDTH: u32 = 320;

/// Panel height in landscape orientation.
pub const PANEL_HEIGHT: u32 = 240;

/// SPI clock for the ST7789. 40 MHz is reliable on the PIM715 wiring.
pub const SPI_FREQUENCY_HZ: u32 = 40_000_000;

/// Where the watch face sits on the panel, centered.
pub const FACE_AREA: Rectangle = Rectangle::new(
    Point::new(
        ((PANEL_WIDTH - SCREEN_WIDTH) / 2) as i32,
        ((PANEL_HEIGHT - SCREEN_HEIGHT) / 2) as i32,
    ),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
);

// =============================================================================
// Companion Link
// =============================================================================

/// UART baud rate of the phone bridge.
pub const UART_BAUD: u32 = 115_200;

/// Decoded frames buffered between the link task and the render loop.
pub const LINK_QUEUE_DEPTH: usize = 4;

// =============================================================================
// Timing
// =============================================================================

/// Main loop period. Bounds button latency and hands-timer resolution.
pub const LOOP_PERIOD_MS: u64 = 20;

/// The board has no battery-backed RTC; the clock starts here at power-up.
pub const BOOT_TIME: ClockTime = ClockTime::from_minutes_of_day(10 * 60 + 10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_area_centered_on_panel() {
        assert_eq!(FACE_AREA.top_left, Point::new(88, 36));
        let bottom_right = FACE_AREA.bottom_right().unwrap();
        assert_eq!(bottom_right, Point::new(88 + 143, 36 + 167));
    }

    #[test]
    fn test_boot_time() {
        assert_eq!(BOOT_TIME.hour(), 10);
        assert_eq!(BOOT_TIME.minute(), 10);
    }
}
