//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are plain data, so they are built once as
//! `const` values and shared by every draw call instead of being assembled
//! per frame.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_9_POINT, PROFONT_10_POINT};

use crate::colors::BLACK;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally, anchored at the top of the text box.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, anchored at the top. Used for log lines.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Font for the temperature readout.
pub const TEMPERATURE_FONT: &MonoFont<'static> = &PROFONT_10_POINT;

/// Small font for log and status lines; callers pick the color.
pub const LABEL_FONT: &MonoFont<'static> = &PROFONT_9_POINT;

// =============================================================================
// Pre-built Styles
// =============================================================================

/// Black temperature text on the white dial.
pub const TEMPERATURE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(TEMPERATURE_FONT, BLACK);
