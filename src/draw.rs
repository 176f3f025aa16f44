//! # Drawing primitives
//!
//! All primitives write straight into the controller's frame memory. Nothing is buffered on the
//! microcontroller side, so every call costs bus time:
//!
//!  - [`Tft::draw_pixel()`] sends a full address window plus a 2 byte `RAMWR` per pixel, about
//!    30 bytes on the wire. Fine for sparse drawing and lines.
//!  - [`Tft::fill_rect()`] sets the window once and streams all pixels in one transaction.
//!    Prefer it for anything area-shaped.
//!
//! Coordinates are `i32` so shapes may start or end off screen. What falls outside is dropped
//! silently; none of the functions returns an error for bad geometry.
use core::iter;

use hal::blocking::{delay::DelayMs, rng};

use crate::{backend::TftBackend, display::Tft, error::RandomFillError, instructions::prelude::*};

impl<B, D> Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    /// Set one pixel. Does nothing off screen.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: impl Into<u16>) -> Result<(), B::Error> {
        if self.is_out_of_bounds(&[x, y]) {
            return Ok(());
        }
        self.set_address_window(x, y, x, y)?;
        self.send_command(RAMWR, &color.into().to_be_bytes())
    }

    /// Draw a line from (x0, y0) to (x1, y1), both ends included.
    ///
    /// Steps one pixel at a time along the longer axis. The shorter axis advances by its total
    /// delta divided by the number of steps, truncated to an integer, so shallow diagonals come
    /// out as straight runs. Pixels off screen are skipped.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: impl Into<u16>,
    ) -> Result<(), B::Error> {
        let color = color.into();
        let dx = x1.saturating_sub(x0);
        let dy = y1.saturating_sub(y0);

        let (steps, x_step, y_step) = if dy.saturating_abs() > dx.saturating_abs() {
            let steps = dy.saturating_abs();
            let x_step = if dx == 0 { 0 } else { dx / steps };
            (steps, x_step, dy.signum())
        } else {
            let steps = dx.saturating_abs();
            let y_step = if dy == 0 { 0 } else { dy / steps };
            (steps, dx.signum(), y_step)
        };

        let (mut x, mut y) = (x0, y0);
        for _ in 0..=steps {
            self.draw_pixel(x, y, color)?;
            x = x.wrapping_add(x_step);
            y = y.wrapping_add(y_step);
        }
        Ok(())
    }

    /// Fill a `width` x `height` rectangle with its top-left corner at (x, y).
    ///
    /// Only the corner is bounds checked: a corner off screen or an empty size draws nothing,
    /// a rectangle running past the right or bottom edge is cut at the edge.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: impl Into<u16>,
    ) -> Result<(), B::Error> {
        let color = color.into();
        let (width, height) = match self.clip_rect(x, y, width, height) {
            Some(size) => size,
            None => return Ok(()),
        };

        self.set_address_window(x, y, x + width - 1, y + height - 1)?;
        self.begin_ram_write()?;
        self.write_words(iter::repeat(color).take(width as usize * height as usize))?;
        self.end_ram_write()
    }

    /// Like [`fill_rect()`](Tft::fill_rect), but every pixel byte comes from `rng`.
    pub fn random_fill_rect<R>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<(), RandomFillError<B::Error, R::Error>>
    where
        R: rng::Read,
    {
        let (width, height) = match self.clip_rect(x, y, width, height) {
            Some(size) => size,
            None => return Ok(()),
        };

        self.set_address_window(x, y, x + width - 1, y + height - 1)
            .map_err(RandomFillError::Bus)?;
        self.begin_ram_write().map_err(RandomFillError::Bus)?;

        let mut buffer = [0u8; 64];
        let mut remaining = width as usize * height as usize * 2;
        while remaining > 0 {
            let chunk = &mut buffer[..remaining.min(64)];
            rng.read(chunk).map_err(RandomFillError::Rng)?;
            self.backend.write(chunk).map_err(RandomFillError::Bus)?;
            remaining -= chunk.len();
        }

        self.end_ram_write().map_err(RandomFillError::Bus)
    }

    /// Paint the whole screen black.
    pub fn clear_screen(&mut self) -> Result<(), B::Error> {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.fill_rect(0, 0, width, height, 0x0000u16)
    }

    // size of the rectangle after clipping to the screen, None if nothing is left to draw
    fn clip_rect(&self, x: i32, y: i32, width: i32, height: i32) -> Option<(i32, i32)> {
        if self.is_out_of_bounds(&[x, y]) || width <= 0 || height <= 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("tft: rect {},{} {}x{} dropped", x, y, width, height);
            return None;
        }
        let width = width.min(i32::from(self.width()) - x);
        let height = height.min(i32::from(self.height()) - y);
        Some((width, height))
    }
}
