//! Weather dial simulator for desktop.
//!
//! Runs the watch face in an `embedded-graphics-simulator` window, driven by
//! the local wall clock. A fake companion phone injects framed weather
//! dictionaries that go through the same decoder as the firmware's UART.
//!
//! | Key | Action |
//! |-----|--------|
//! | S | Select button (hide hands for 2 s) |
//! | N | Report for the next icon category |
//! | T | Temperature-only message (ignored by the face) |
//! | U | Unknown category ("tornado") |
//! | D | Corrupted frame |
//! | O | Oversized frame |
//! | F | Toggle phone online (acks fail while offline) |
//! | L | Toggle log page |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod companion;
mod screens;
mod state;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use dial_common::colors::BLACK;
use dial_common::config::{SCREEN_BOUNDS, SCREEN_HEIGHT, SCREEN_WIDTH};
use dial_common::{BakedIcons, ClockTime, FrameDecoder, LogLevel, MinuteTicker, WatchFace};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::companion::Companion;
use crate::screens::draw_log_page;
use crate::state::{LogHistory, Page};
use crate::timing::{FRAME_TIME, WINDOW_SCALE};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Weather Dial", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let boot = Instant::now();
    let mut face = WatchFace::new(&SCREEN_BOUNDS, BakedIcons);
    let mut ticker = MinuteTicker::new();
    let mut decoder = FrameDecoder::new();
    let mut companion = Companion::new();
    let mut history = LogHistory::new();
    let mut page = Page::default();

    loop {
        let frame_start = Instant::now();
        let now_ms = boot.elapsed().as_millis() as u64;

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let sent = match keycode {
                        Keycode::S => {
                            face.on_select_click(now_ms);
                            Ok(())
                        }
                        Keycode::L => {
                            page = page.toggle();
                            match page {
                                Page::Face => face.invalidate(),
                                Page::Logs => history.mark_dirty(),
                            }
                            Ok(())
                        }
                        Keycode::T => companion.send_temperature_only(),
                        Keycode::U => companion.send_raw_report("tornado"),
                        Keycode::D => companion.send_corrupted(),
                        Keycode::O => {
                            companion.send_oversized();
                            Ok(())
                        }
                        Keycode::F => {
                            let online = companion.toggle_online();
                            face.log_mut().info(if online { "Phone online" } else { "Phone offline" });
                            Ok(())
                        }
                        Keycode::N => companion.send_next_report(),
                        _ => Ok(()),
                    };
                    if let Err(e) = sent {
                        face.log_mut().push_fmt(LogLevel::Warn, format_args!("Phone build failed: {e}"));
                    }
                }
                _ => {}
            }
        }

        // Companion link: feed every pending byte through the decoder
        while let Some(byte) = companion.next_byte() {
            if let Some(event) = decoder.push(byte) {
                let reply = face.on_link_event(&event);
                if companion.receive_reply(reply) {
                    face.on_outbox_sent();
                } else {
                    face.on_outbox_failed();
                }
            }
        }

        // Wall clock
        let local = Local::now();
        if let Some(time) = ClockTime::new(local.hour() as u8, local.minute() as u8)
            && ticker.observe(time)
        {
            face.on_minute_tick(time);
        }

        face.poll_timers(now_ms);
        history.extend(face.log_mut().drain());

        match page {
            Page::Face => {
                if face.needs_redraw() {
                    face.draw(&mut display);
                }
            }
            Page::Logs => {
                if history.take_dirty() {
                    draw_log_page(&mut display, &history, companion.stats(), companion.is_online());
                }
            }
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
