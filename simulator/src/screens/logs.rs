//! Log page: drained event log plus link counters.

use core::fmt::Write;

use dial_common::colors::{BLACK, GRAY, GREEN, WHITE};
use dial_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use dial_common::styles::{LABEL_FONT, LEFT_TOP};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::companion::LinkStats;
use crate::state::LogHistory;

const MARGIN_X: i32 = 2;
const HEADER_Y: i32 = 2;
const STATS_Y: i32 = 14;
const DIVIDER_Y: i32 = 26;
const LOG_Y: i32 = 30;
const LOG_LINE_HEIGHT: i32 = 12;

/// Characters that fit on one line at the label font width.
const LINE_CHARS: usize = 23;

const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

pub fn draw_log_page(
    display: &mut SimulatorDisplay<Rgb565>,
    history: &LogHistory,
    stats: LinkStats,
    online: bool,
) {
    display.clear(BLACK).ok();
    draw_header(display, stats, online);

    Line::new(Point::new(MARGIN_X, DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - MARGIN_X, DIVIDER_Y))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    draw_terminal(display, history);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    stats: LinkStats,
    online: bool,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, GREEN);
    let value_style = MonoTextStyle::new(LABEL_FONT, WHITE);

    let title = if online { "LOG  phone:on" } else { "LOG  phone:off" };
    Text::with_text_style(title, Point::new(MARGIN_X, HEADER_Y), header_style, LEFT_TOP)
        .draw(display)
        .ok();

    let mut s: String<32> = String::new();
    let _ = write!(s, "tx {} ack {} nak {}", stats.frames_sent, stats.acked, stats.nacked);
    Text::with_text_style(&s, Point::new(MARGIN_X, STATS_Y), value_style, LEFT_TOP)
        .draw(display)
        .ok();
}

fn draw_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    history: &LogHistory,
) {
    Rectangle::new(
        Point::new(0, DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for entry in history.iter() {
        let mut line: String<LINE_CHARS> = String::new();
        let _ = line.push(entry.level.prefix());
        let _ = line.push(' ');
        for c in entry.message.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
        Text::with_text_style(&line, Point::new(MARGIN_X, y), style, LEFT_TOP)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}
