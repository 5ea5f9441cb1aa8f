//! In-memory draw target for host tests.
//!
//! `MockDisplay` from embedded-graphics is fixed at 64x64, which is smaller
//! than the face, so tests render into this canvas instead.

use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Framebuffer that ignores out-of-bounds pixels.
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new(
        size: Size,
        background: Rgb565,
    ) -> Self {
        Self {
            size,
            pixels: vec![background; (size.width * size.height) as usize],
        }
    }

    fn index(
        &self,
        p: Point,
    ) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.width as i32 || p.y >= self.size.height as i32 {
            return None;
        }
        Some(p.y as usize * self.size.width as usize + p.x as usize)
    }

    /// Color at `p`, or `None` outside the canvas.
    pub fn pixel(
        &self,
        p: Point,
    ) -> Option<Rgb565> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Number of pixels holding `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Raw pixel data, row-major.
    pub fn pixels(&self) -> &[Rgb565] { &self.pixels }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
