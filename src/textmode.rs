//! # Text output with the built-in 5x5 font
//!
//! This module is behind the `text` feature flag (enabled by default).
//!
//! Characters are drawn into fixed cells of 5x5 pixels, or 10x10 when zoomed, placed side by
//! side without extra spacing; the glyphs carry their own empty column. Every cell is painted
//! completely, background included, so text can be overwritten in place without clearing first.
//! There is no cursor and no line wrapping: a cell that would cross the screen edge is skipped.
use core::fmt::Write;

use hal::blocking::delay::DelayMs;
use heapless::String;

use crate::{
    backend::TftBackend,
    display::Tft,
    font::{self, GLYPH_SIZE},
};

impl<B, D> Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    /// Draw `text` with the top-left corner of its first cell at (x, y).
    ///
    /// Set dots get `font_color`, the rest of each cell `bg_color`. `zoomed` doubles every dot
    /// in both directions. Characters outside printable ASCII are drawn as `?`.
    pub fn show_string(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font_color: impl Into<u16>,
        bg_color: impl Into<u16>,
        zoomed: bool,
    ) -> Result<(), B::Error> {
        let (fg, bg) = (font_color.into(), bg_color.into());
        let zoom: i32 = if zoomed { 2 } else { 1 };
        let cell = GLYPH_SIZE as i32 * zoom;

        for (index, c) in text.chars().enumerate() {
            let left = (index as i32).saturating_mul(cell).saturating_add(x);
            let (right, bottom) = (left.saturating_add(cell - 1), y.saturating_add(cell - 1));
            if self.is_out_of_bounds(&[left, y, right, bottom]) {
                #[cfg(feature = "defmt")]
                defmt::trace!("tft: char {} at {},{} off screen", index, left, y);
                continue;
            }

            let glyph = font::glyph(c);
            let pixels = (0..cell).flat_map(move |py| {
                (0..cell).map(move |px| {
                    let (row, col) = ((py / zoom) as usize, (px / zoom) as usize);
                    if font::dot(glyph, row, col) {
                        fg
                    } else {
                        bg
                    }
                })
            });

            self.set_address_window(left, y, right, bottom)?;
            self.begin_ram_write()?;
            self.write_words(pixels)?;
            self.end_ram_write()?;
        }
        Ok(())
    }

    /// Draw `num` in decimal, see [`show_string()`](Tft::show_string).
    pub fn show_number(
        &mut self,
        x: i32,
        y: i32,
        num: i32,
        font_color: impl Into<u16>,
        bg_color: impl Into<u16>,
        zoomed: bool,
    ) -> Result<(), B::Error> {
        // "-2147483648" is the longest an i32 gets
        let mut text: String<11> = String::new();
        if write!(text, "{}", num).is_err() {
            return Ok(());
        }
        self.show_string(x, y, &text, font_color, bg_color, zoomed)
    }
}
