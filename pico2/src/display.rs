//! ST7789 panel bring-up. Pins and sizes live in [`dial_pico2::config`].

use dial_pico2::config::{PANEL_HEIGHT, PANEL_WIDTH, SPI_FREQUENCY_HZ};
use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};

/// The PIM715 panel behind a chip-selected blocking SPI bus.
pub type Panel<'d> = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7789,
    NoResetPin,
>;

pub fn spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = SPI_FREQUENCY_HZ;
    config
}

/// Landscape, colors inverted. The native panel is portrait, so the
/// height goes first.
pub fn init_panel<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> Panel<'d> {
    let device = ExclusiveDevice::new_no_delay(spi, cs).expect("chip select is infallible");
    let interface = SPIInterface::new(device, dc);

    Builder::new(ST7789, interface)
        .display_size(PANEL_HEIGHT as u16, PANEL_WIDTH as u16)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .expect("ST7789 init failed")
}
