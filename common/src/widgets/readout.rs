//! Weather readout: ring, temperature text and icon placement.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::outline_circle;
use crate::colors::BLACK;
use crate::config::{TEMPERATURE_BOX, WEATHER_RING_CENTER, WEATHER_RING_RADIUS};
use crate::styles::{CENTERED_TOP, TEMPERATURE_STYLE};

/// Thin ring framing the readout.
pub fn draw_weather_ring<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    outline_circle(display, WEATHER_RING_CENTER, WEATHER_RING_RADIUS, BLACK);
}

/// Temperature centered in its box; anything wider than the box is clipped.
pub fn draw_temperature<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_in_box(display, text, &TEMPERATURE_BOX);
}

fn draw_text_in_box<D>(
    display: &mut D,
    text: &str,
    area: &Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let anchor = Point::new(area.center().x, area.top_left.y);
    let mut clipped = display.clipped(area);
    Text::with_text_style(text, anchor, TEMPERATURE_STYLE, CENTERED_TOP)
        .draw(&mut clipped)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::testing::Canvas;

    fn ink_outside(
        canvas: &Canvas,
        area: &Rectangle,
    ) -> usize {
        let mut n = 0;
        for y in 0..SCREEN_HEIGHT as i32 {
            for x in 0..SCREEN_WIDTH as i32 {
                let p = Point::new(x, y);
                if !area.contains(p) && canvas.pixel(p) == Some(BLACK) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_temperature_stays_in_box() {
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), WHITE);
        draw_temperature(&mut canvas, "-2147483648");
        assert!(canvas.count(BLACK) > 0);
        assert_eq!(ink_outside(&canvas, &TEMPERATURE_BOX), 0);
    }

    #[test]
    fn test_ring_is_centered() {
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), WHITE);
        draw_weather_ring(&mut canvas);
        let c = WEATHER_RING_CENTER;
        let r = WEATHER_RING_RADIUS as i32;
        assert_eq!(canvas.pixel(c + Point::new(0, -r)), Some(BLACK));
        assert_eq!(canvas.pixel(c + Point::new(r, 0)), Some(BLACK));
        assert_eq!(canvas.pixel(c), Some(WHITE));
    }
}
