//! Color constants for the watch face.
//!
//! The face itself is strictly two-tone (black and white), matching the
//! monochrome panel it was designed for. The extra colors are only used by the
//! simulator log page and the log level badges.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Face Colors
// =============================================================================

/// Pure black. Window background, outlines, fillers and tick marks.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Dial disc, hand bodies and hub cap.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Log Colors
// =============================================================================

/// Errors (dropped messages, failed acknowledgements).
pub const RED: Rgb565 = Rgb565::RED;

/// Normal operation.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Warnings.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Dark gray for debug output and dividers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
