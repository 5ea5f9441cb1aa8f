//! Baked weather icons.
//!
//! Each icon is 24x16 black line art meant to be composited onto the white
//! dial: only the set pixels are painted, the rest of the box is left alone.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use super::primitives::{fill_circle, stroke_line};
use crate::colors::{BLACK, WHITE};
use crate::weather::ResourceId;

/// Icon width in pixels.
pub const ICON_WIDTH: u32 = 24;

/// Icon height in pixels.
pub const ICON_HEIGHT: u32 = 16;

const INK: Rgb565 = BLACK;
const PAPER: Rgb565 = WHITE;

/// Draw the icon for `id` with its top-left corner at `origin`.
pub fn draw_baked_icon<D>(
    display: &mut D,
    id: ResourceId,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match id {
        ResourceId::ClearSkyDayBlack => draw_sun(display, origin + Point::new(12, 8), 4, 2),
        ResourceId::ClearSkyNightBlack => draw_moon(display, origin + Point::new(12, 8), 6),
        ResourceId::CloudyBlack => draw_cloud(display, origin + Point::new(12, 8)),
        ResourceId::RainBlack => {
            draw_cloud(display, origin + Point::new(12, 5));
            for dx in [-5, 0, 5] {
                let top = origin + Point::new(12 + dx, 11);
                stroke_line(display, top, top + Point::new(-1, 3), 1, INK);
            }
        }
        ResourceId::SnowBlack => {
            draw_cloud(display, origin + Point::new(12, 5));
            for (dx, dy) in [(-5, 12), (0, 14), (5, 12)] {
                fill_circle(display, origin + Point::new(12 + dx, dy), 1, INK);
            }
        }
        ResourceId::SleetBlack => {
            draw_cloud(display, origin + Point::new(12, 5));
            let drop = origin + Point::new(8, 11);
            stroke_line(display, drop, drop + Point::new(-1, 3), 1, INK);
            fill_circle(display, origin + Point::new(16, 13), 1, INK);
        }
        ResourceId::WindBlack => {
            for (y, len) in [(4, 16), (8, 20), (12, 12)] {
                let start = origin + Point::new(2, y);
                stroke_line(display, start, start + Point::new(len, 0), 1, INK);
            }
            // Curled tips
            stroke_line(display, origin + Point::new(18, 4), origin + Point::new(20, 2), 1, INK);
            stroke_line(display, origin + Point::new(22, 8), origin + Point::new(22, 6), 1, INK);
        }
        ResourceId::FogBlack => {
            for (y, inset) in [(3, 2), (7, 0), (11, 2), (15, 4)] {
                let start = origin + Point::new(inset, y);
                stroke_line(display, start, origin + Point::new(23 - inset, y), 1, INK);
            }
        }
        ResourceId::PartlyCloudyDayBlack => {
            draw_sun(display, origin + Point::new(8, 6), 3, 2);
            draw_cloud(display, origin + Point::new(14, 9));
        }
        ResourceId::PartlyCloudyNightBlack => {
            draw_moon(display, origin + Point::new(8, 6), 5);
            draw_cloud(display, origin + Point::new(14, 9));
        }
    }
}

/// Disc with eight rays.
fn draw_sun<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    ray: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_circle(display, center, radius, INK);
    let r = radius as i32 + 1;
    let d = (r * 7) / 10;
    let dd = ((r + ray) * 7) / 10;
    for (inner, outer) in [
        (Point::new(0, -r), Point::new(0, -r - ray)),
        (Point::new(0, r), Point::new(0, r + ray)),
        (Point::new(-r, 0), Point::new(-r - ray, 0)),
        (Point::new(r, 0), Point::new(r + ray, 0)),
        (Point::new(d, d), Point::new(dd, dd)),
        (Point::new(-d, d), Point::new(-dd, dd)),
        (Point::new(d, -d), Point::new(dd, -dd)),
        (Point::new(-d, -d), Point::new(-dd, -dd)),
    ] {
        stroke_line(display, center + inner, center + outer, 1, INK);
    }
}

/// Crescent: a disc with a paper-colored bite taken out of its upper right.
fn draw_moon<D>(
    display: &mut D,
    center: Point,
    radius: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_circle(display, center, radius, INK);
    let bite = radius as i32 / 2 + 1;
    fill_circle(display, center + Point::new(bite, -bite), radius.saturating_sub(1), PAPER);
}

/// Outlined cloud, centered roughly on `center`, about 16x8 pixels.
fn draw_cloud<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outline = PrimitiveStyle::with_stroke(INK, 1);
    let body = PrimitiveStyle::with_fill(PAPER);

    let puffs = [
        (Point::new(-5, 1), 7),
        (Point::new(0, -1), 9),
        (Point::new(5, 1), 7),
    ];
    for (offset, diameter) in puffs {
        Circle::with_center(center + offset, diameter)
            .into_styled(outline)
            .draw(display)
            .ok();
    }
    // Flat base hides the inner arcs of the puffs
    Rectangle::new(center + Point::new(-5, 0), Size::new(11, 4))
        .into_styled(body)
        .draw(display)
        .ok();
    for (offset, diameter) in puffs {
        Circle::with_center(center + offset, diameter.saturating_sub(2))
            .into_styled(body)
            .draw(display)
            .ok();
    }
    stroke_line(display, center + Point::new(-5, 4), center + Point::new(5, 4), 1, INK);
}

// =============================================================================
// Unit Tests
// =============================================================================
