//! Static dial: white disc plus a ring of 60 tick marks.
//!
//! The dial only depends on the bounds it is drawn into, so [`Dial::new`]
//! resolves every tick endpoint once and [`Dial::draw`] just replays them.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, WHITE};
use crate::config::{
    DIAL_OVERDRAW,
    MAJOR_TICK_EVERY,
    MAJOR_TICK_LENGTH,
    MAJOR_TICK_WIDTH,
    MINOR_TICK_LENGTH,
    MINOR_TICK_WIDTH,
    TICK_COUNT,
};
use crate::trig::{TRIG_MAX_ANGLE, polar_offset};
use crate::widgets::{fill_circle, stroke_line};

/// One radial tick, from the inner `start` to the rim `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickMark {
    pub start: Point,
    pub end: Point,
    pub major: bool,
}

impl TickMark {
    /// Tick `index` of [`TICK_COUNT`] around `center` with rim at `radius`.
    pub fn new(
        index: usize,
        center: Point,
        radius: i32,
    ) -> Self {
        let major = index % MAJOR_TICK_EVERY == 0;
        let length = if major { MAJOR_TICK_LENGTH } else { MINOR_TICK_LENGTH };
        let angle = TRIG_MAX_ANGLE * index as i32 / TICK_COUNT as i32;

        let (sx, sy) = polar_offset(angle, radius - length);
        let (ex, ey) = polar_offset(angle, radius);
        Self {
            start: center + Point::new(sx, sy),
            end: center + Point::new(ex, ey),
            major,
        }
    }

    #[inline]
    pub const fn stroke_width(&self) -> u32 { if self.major { MAJOR_TICK_WIDTH } else { MINOR_TICK_WIDTH } }
}

/// Center of `bounds`, rounding half sizes down (a 144px width centers on x = 72).
#[inline]
pub const fn face_center(bounds: &Rectangle) -> Point {
    Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + (bounds.size.height / 2) as i32,
    )
}

/// Disc radius for `bounds`: half the width plus the overdraw margin.
#[inline]
pub const fn dial_radius(bounds: &Rectangle) -> i32 { ((bounds.size.width + DIAL_OVERDRAW) / 2) as i32 }

/// Cached dial geometry.
#[derive(Clone, Debug)]
pub struct Dial {
    center: Point,
    radius: i32,
    ticks: [TickMark; TICK_COUNT],
}

impl Dial {
    pub fn new(bounds: &Rectangle) -> Self {
        let center = face_center(bounds);
        let radius = dial_radius(bounds);
        Self {
            center,
            radius,
            ticks: core::array::from_fn(|i| TickMark::new(i, center, radius)),
        }
    }

    #[inline]
    pub const fn center(&self) -> Point { self.center }

    #[inline]
    pub const fn radius(&self) -> i32 { self.radius }

    #[inline]
    pub const fn ticks(&self) -> &[TickMark; TICK_COUNT] { &self.ticks }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        fill_circle(display, self.center, self.radius as u32, WHITE);
        for tick in &self.ticks {
            stroke_line(display, tick.end, tick.start, tick.stroke_width(), BLACK);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
