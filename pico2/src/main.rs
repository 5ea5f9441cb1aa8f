//! Weather Dial Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the analog weather watch face on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! - Link task: decodes framed dictionaries from the phone bridge on UART0 and
//!   acknowledges them, handing outcomes over [`LINK_CHANNEL`]
//! - Main task: owns the [`WatchFace`], feeds it button presses, link messages
//!   and clock minutes, and redraws when a layer is dirty
//!
//! # Button Controls
//!
//! - **A**: Select (hide the hands for two seconds)

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod display;
mod tasks;

use defmt::info;
use dial_common::{BLACK, BakedIcons, LogEntry, LogLevel, MinuteTicker, SCREEN_BOUNDS, WatchFace};
use dial_pico2::ButtonState;
use dial_pico2::config::{BOOT_TIME, FACE_AREA, LOOP_PERIOD_MS, UART_BAUD};
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{Config as UartConfig, InterruptHandler, Uart};
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{init_panel, spi_config};
use crate::tasks::{LINK_CHANNEL, link_task};

bind_interrupts!(struct Irqs {
    UART0_IRQ => InterruptHandler<UART0>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-weather-dial"),
    embassy_rp::binary_info::rp_program_description!(c"Analog weather watch face on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Forward one event log entry to defmt at its level.
fn forward_log(entry: &LogEntry) {
    let msg = entry.message.as_str();
    match entry.level {
        LogLevel::Trace => defmt::trace!("{=str}", msg),
        LogLevel::Debug => defmt::debug!("{=str}", msg),
        LogLevel::Info => defmt::info!("{=str}", msg),
        LogLevel::Warn => defmt::warn!("{=str}", msg),
        LogLevel::Error => defmt::error!("{=str}", msg),
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Weather dial starting...");

    let p = embassy_rp::init(Default::default());

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only, the panel has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config());
    let mut panel = init_panel(spi, cs, dc);
    panel.clear(BLACK).ok();
    info!("Display initialized");

    // Companion bridge on UART0 (TX=0, RX=1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = UART_BAUD;
    let uart = Uart::new(p.UART0, p.PIN_0, p.PIN_1, Irqs, p.DMA_CH0, p.DMA_CH1, uart_config);
    let (tx, rx) = uart.split();
    spawner.spawn(link_task(rx, tx)).unwrap();
    info!("Link task spawned");

    // Button A as select (active-low with internal pull-up)
    let select = Input::new(p.PIN_12, Pull::Up);
    let mut select_state = ButtonState::new();

    let boot = Instant::now();
    let mut face = WatchFace::new(&SCREEN_BOUNDS, BakedIcons);
    let mut ticker = MinuteTicker::new();

    info!("Main loop starting");

    loop {
        let now_ms = boot.elapsed().as_millis();

        if select_state.just_pressed(select.is_low(), now_ms) {
            face.on_select_click(now_ms);
        }

        while let Ok(message) = LINK_CHANNEL.try_receive() {
            message.dispatch(&mut face);
        }

        let time = BOOT_TIME.advanced_by_ms(now_ms);
        if ticker.observe(time) {
            face.on_minute_tick(time);
        }

        face.poll_timers(now_ms);

        for entry in face.log_mut().drain() {
            forward_log(&entry);
        }

        if face.needs_redraw() {
            face.draw(&mut panel.cropped(&FACE_AREA));
        }

        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
