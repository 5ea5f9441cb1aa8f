//! Display, layout and timing constants for the watch face.
//!
//! Everything here is `const` so geometry that only depends on the screen size
//! (dial radius, center, tick lengths) is resolved at compile time.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Face width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Face height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Bounds of the whole face.
pub const SCREEN_BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Dial
// =============================================================================

/// Added to the bounds width before halving, so the disc overdraws the edges.
pub const DIAL_OVERDRAW: u32 = 8;

/// Number of tick marks around the dial.
pub const TICK_COUNT: usize = 60;

/// Every Nth tick is a major (hour) tick.
pub const MAJOR_TICK_EVERY: usize = 5;

/// Stroke width of hour ticks.
pub const MAJOR_TICK_WIDTH: u32 = 4;

/// Radial length of hour ticks.
pub const MAJOR_TICK_LENGTH: i32 = 8;

/// Stroke width of minute ticks.
pub const MINOR_TICK_WIDTH: u32 = 1;

/// Radial length of minute ticks.
pub const MINOR_TICK_LENGTH: i32 = 4;

// =============================================================================
// Hands
// =============================================================================

/// Radius of the white hub cap drawn over the hand roots.
pub const HUB_RADIUS: u32 = 7;

/// Radius of the black pivot dot.
pub const PIVOT_RADIUS: u32 = 1;

/// How long the hands stay hidden after a select press.
pub const HANDS_HIDDEN_MS: u64 = 2000;

// =============================================================================
// Weather Readout
// =============================================================================

/// Temperature shown before the phone has sent anything.
pub const PLACEHOLDER_TEMPERATURE: &str = "100";

/// Capacity of the temperature text. Fits any `i32` ("-2147483648").
pub const TEMPERATURE_TEXT_LEN: usize = 11;

/// Capacity of the icon category text, one byte short of the 32-byte buffer
/// the phone protocol was sized for (room for the terminator).
pub const ICON_CATEGORY_LEN: usize = 31;

/// Temperature text box.
pub const TEMPERATURE_BOX: Rectangle = Rectangle::new(Point::new(60, 28), Size::new(24, 16));

/// Weather icon box.
pub const ICON_BOX: Rectangle = Rectangle::new(Point::new(60, 46), Size::new(24, 16));

/// Center of the ring framing the weather readout.
pub const WEATHER_RING_CENTER: Point = Point::new((SCREEN_WIDTH / 2) as i32, 46);

/// Radius of the ring framing the weather readout.
pub const WEATHER_RING_RADIUS: u32 = 18;

// =============================================================================
// Messaging
// =============================================================================

/// Dictionary key carrying the temperature.
pub const KEY_TEMPERATURE: u32 = 0;

/// Dictionary key carrying the icon category.
pub const KEY_ICON: u32 = 1;

/// Largest dictionary accepted from the companion link.
pub const INBOX_SIZE: usize = 64;
