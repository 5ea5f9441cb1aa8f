//! Clock hand geometry and rendering.
//!
//! Each hand is two convex polygons defined around the pivot at (0, 0),
//! pointing at 12 o'clock: a white *body* and a narrow black *filler* drawn on
//! top so the hand looks hollow towards the hub.
//!
//! A [`HandPath`] keeps its definition immutable and stores only the current
//! rotation and pivot offset, so rotating to the same angle twice always
//! yields the same points.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::clock::ClockTime;
use crate::colors::{BLACK, WHITE};
use crate::config::{HUB_RADIUS, PIVOT_RADIUS};
use crate::trig::{TRIG_MAX_ANGLE, TRIG_MAX_RATIO, cos_lookup, sin_lookup};
use crate::widgets::{MAX_POLYGON_POINTS, fill_circle, fill_polygon, outline_circle, outline_polygon};

// =============================================================================
// Hand Definitions
// =============================================================================

pub const MINUTE_HAND_POINTS: [Point; 5] = [
    Point::new(5, 16),
    Point::new(-5, 16),
    Point::new(-4, -64),
    Point::new(0, -70),
    Point::new(4, -64),
];

pub const MINUTE_HAND_FILLER: [Point; 4] = [
    Point::new(2, -16),
    Point::new(-2, -16),
    Point::new(-2, -60),
    Point::new(2, -60),
];

pub const HOUR_HAND_POINTS: [Point; 5] = [
    Point::new(5, 16),
    Point::new(-5, 16),
    Point::new(-4, -48),
    Point::new(0, -54),
    Point::new(4, -48),
];

pub const HOUR_HAND_FILLER: [Point; 4] = [
    Point::new(2, -16),
    Point::new(-2, -16),
    Point::new(-2, -44),
    Point::new(2, -44),
];

// =============================================================================
// Angles
// =============================================================================

/// Minute hand angle in trig units: one full turn per hour.
#[inline]
pub const fn minute_angle(time: ClockTime) -> i32 { TRIG_MAX_ANGLE * time.minute() as i32 / 60 }

/// Hour hand angle in trig units.
///
/// The hour hand moves in 72 steps per half day, i.e. it advances every
/// 10 minutes instead of jumping once per hour.
#[inline]
pub const fn hour_angle(time: ClockTime) -> i32 {
    let steps = (time.hour() as i32 % 12) * 6 + time.minute() as i32 / 10;
    TRIG_MAX_ANGLE * steps / (12 * 6)
}

// =============================================================================
// Hand Path
// =============================================================================

/// A polygon that can be rotated about, and moved to, a pivot point.
#[derive(Clone, Debug)]
pub struct HandPath {
    points: &'static [Point],
    rotation: i32,
    offset: Point,
}

impl HandPath {
    /// Create a path at rotation 0 with its pivot at the origin.
    pub const fn new(points: &'static [Point]) -> Self {
        Self {
            points,
            rotation: 0,
            offset: Point::zero(),
        }
    }

    /// Place the pivot at `offset`.
    #[inline]
    pub fn move_to(
        &mut self,
        offset: Point,
    ) {
        self.offset = offset;
    }

    /// Replace the current rotation (absolute, not cumulative).
    #[inline]
    pub fn rotate_to(
        &mut self,
        angle: i32,
    ) {
        self.rotation = angle;
    }

    #[inline]
    pub const fn rotation(&self) -> i32 { self.rotation }

    #[inline]
    pub const fn offset(&self) -> Point { self.offset }

    /// Definition points rotated and translated into screen coordinates.
    pub fn transformed(&self) -> Vec<Point, MAX_POLYGON_POINTS> {
        let sin = sin_lookup(self.rotation);
        let cos = cos_lookup(self.rotation);
        let mut out = Vec::new();
        for p in self.points.iter().take(MAX_POLYGON_POINTS) {
            let x = p.x * cos / TRIG_MAX_RATIO - p.y * sin / TRIG_MAX_RATIO + self.offset.x;
            let y = p.y * cos / TRIG_MAX_RATIO + p.x * sin / TRIG_MAX_RATIO + self.offset.y;
            out.push(Point::new(x, y)).ok();
        }
        out
    }

    /// Fill with `fill` and outline with `stroke`.
    pub fn draw<D>(
        &self,
        display: &mut D,
        fill: Rgb565,
        stroke: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let points = self.transformed();
        fill_polygon(display, &points, fill);
        outline_polygon(display, &points, stroke);
    }
}

// =============================================================================
// Hands
// =============================================================================

/// The four hand paths, pivoted on the dial center.
#[derive(Clone, Debug)]
pub struct Hands {
    minute: HandPath,
    minute_filler: HandPath,
    hour: HandPath,
    hour_filler: HandPath,
    center: Point,
}

impl Hands {
    /// Build the paths and move them onto `center` once.
    pub fn new(center: Point) -> Self {
        let mut hands = Self {
            minute: HandPath::new(&MINUTE_HAND_POINTS),
            minute_filler: HandPath::new(&MINUTE_HAND_FILLER),
            hour: HandPath::new(&HOUR_HAND_POINTS),
            hour_filler: HandPath::new(&HOUR_HAND_FILLER),
            center,
        };
        for path in hands.paths_mut() {
            path.move_to(center);
        }
        hands
    }

    fn paths_mut(&mut self) -> [&mut HandPath; 4] {
        [
            &mut self.minute,
            &mut self.minute_filler,
            &mut self.hour,
            &mut self.hour_filler,
        ]
    }

    /// Rotate all paths to show `time`.
    pub fn set_time(
        &mut self,
        time: ClockTime,
    ) {
        let minute = minute_angle(time);
        let hour = hour_angle(time);
        self.minute.rotate_to(minute);
        self.minute_filler.rotate_to(minute);
        self.hour.rotate_to(hour);
        self.hour_filler.rotate_to(hour);
    }

    #[inline]
    pub const fn center(&self) -> Point { self.center }

    #[inline]
    pub const fn minute_path(&self) -> &HandPath { &self.minute }

    #[inline]
    pub const fn hour_path(&self) -> &HandPath { &self.hour }

    /// Draw both hands for `time`, then the hub.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        time: ClockTime,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.set_time(time);

        self.minute.draw(display, WHITE, BLACK);
        self.hour.draw(display, WHITE, BLACK);

        self.minute_filler.draw(display, BLACK, BLACK);
        self.hour_filler.draw(display, BLACK, BLACK);

        fill_circle(display, self.center, HUB_RADIUS, WHITE);
        outline_circle(display, self.center, HUB_RADIUS, BLACK);
        fill_circle(display, self.center, PIVOT_RADIUS, BLACK);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
