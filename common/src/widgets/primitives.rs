//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Polyline, Triangle};
use heapless::Vec;

/// Most vertices a polygon may have (a closed outline needs one extra).
pub const MAX_POLYGON_POINTS: usize = 8;

/// Fill a convex polygon by fanning triangles out from its first vertex.
pub fn fill_polygon<D>(
    display: &mut D,
    points: &[Point],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if points.len() < 3 {
        return;
    }
    let style = PrimitiveStyle::with_fill(color);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        Triangle::new(anchor, pair[0], pair[1])
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

/// Draw the closed 1px outline of a polygon.
pub fn outline_polygon<D>(
    display: &mut D,
    points: &[Point],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(&first) = points.first() else {
        return;
    };
    let mut closed: Vec<Point, { MAX_POLYGON_POINTS + 1 }> = Vec::new();
    for &p in points.iter().take(MAX_POLYGON_POINTS) {
        closed.push(p).ok();
    }
    closed.push(first).ok();

    Polyline::new(&closed)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Diameter covering `radius` pixels on each side of the center pixel.
#[inline]
pub const fn diameter(radius: u32) -> u32 { radius * 2 + 1 }

/// Fill a disc of `radius` around `center`.
pub fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a 1px circle of `radius` around `center`.
pub fn outline_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Draw a straight line of the given stroke width.
pub fn stroke_line<D>(
    display: &mut D,
    from: Point,
    to: Point,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::testing::Canvas;

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut canvas = Canvas::new(Size::new(20, 20), BLACK);
        let square = [Point::new(2, 2), Point::new(10, 2), Point::new(10, 10), Point::new(2, 10)];
        fill_polygon(&mut canvas, &square, WHITE);
        assert_eq!(canvas.pixel(Point::new(6, 6)), Some(WHITE));
        assert_eq!(canvas.pixel(Point::new(15, 15)), Some(BLACK));
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut canvas = Canvas::new(Size::new(10, 10), BLACK);
        fill_polygon(&mut canvas, &[Point::new(1, 1), Point::new(5, 5)], WHITE);
        outline_polygon(&mut canvas, &[], WHITE);
        assert_eq!(canvas.count(WHITE), 0);
    }

    #[test]
    fn test_outline_polygon_closes_shape() {
        let mut canvas = Canvas::new(Size::new(20, 20), BLACK);
        let square = [Point::new(2, 2), Point::new(10, 2), Point::new(10, 10), Point::new(2, 10)];
        outline_polygon(&mut canvas, &square, WHITE);
        // Closing edge from (2, 10) back to (2, 2)
        assert_eq!(canvas.pixel(Point::new(2, 6)), Some(WHITE));
        assert_eq!(canvas.pixel(Point::new(6, 6)), Some(BLACK));
    }

    #[test]
    fn test_circle_radius_matches_diameter() {
        assert_eq!(diameter(0), 1);
        assert_eq!(diameter(7), 15);

        let mut canvas = Canvas::new(Size::new(21, 21), BLACK);
        fill_circle(&mut canvas, Point::new(10, 10), 7, WHITE);
        assert_eq!(canvas.pixel(Point::new(10, 3)), Some(WHITE));
        assert_eq!(canvas.pixel(Point::new(10, 2)), Some(BLACK));
    }
}
