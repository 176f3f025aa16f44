//! # Hardware vertical scrolling
//!
//! This module is behind the `scroll` feature flag (enabled by default).
//!
//! The controller splits its frame memory into a fixed top area, a scrolling area and a fixed
//! bottom area ([`Tft::set_scroll_window()`]), then shows the scrolling area starting at any of
//! its lines ([`Tft::scroll_by()`]). No pixel data moves; the controller only changes which
//! memory line it scans out first, so scrolling is a single 2 byte command.
use hal::blocking::delay::DelayMs;

use crate::{backend::TftBackend, display::Tft, instructions::prelude::*};

impl<B, D> Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    /// Scroll the lines `top..bottom`, everything above and below stays in place.
    ///
    /// The bottom fixed area is whatever remains of the controller's frame memory
    /// (160 lines on the ST7735, 320 on the ILI9341). Values are not checked; keep
    /// `top <= bottom <= ` that line count.
    pub fn set_scroll_window(&mut self, top: u16, bottom: u16) -> Result<(), B::Error> {
        let area = bottom.wrapping_sub(top);
        let margin = self
            .controller()
            .scroll_lines()
            .wrapping_sub(top)
            .wrapping_sub(area);
        self.scroll_top = top;
        self.scroll_area = area;

        #[cfg(feature = "defmt")]
        defmt::debug!("tft: scroll top {} area {} bottom {}", top, area, margin);

        let [top_hi, top_lo] = top.to_be_bytes();
        let [area_hi, area_lo] = area.to_be_bytes();
        let [margin_hi, margin_lo] = margin.to_be_bytes();
        self.send_command(
            VSCRDEF,
            &[top_hi, top_lo, area_hi, area_lo, margin_hi, margin_lo],
        )
    }

    /// Show the scroll area starting `amount` lines below its top, wrapping around.
    ///
    /// Negative amounts scroll the other way. Does nothing before a scroll window with a
    /// non-empty area has been set.
    pub fn scroll_by(&mut self, amount: i32) -> Result<(), B::Error> {
        if self.scroll_area == 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("tft: scroll_by without scroll area");
            return Ok(());
        }
        let line = (i64::from(amount) + i64::from(self.scroll_top))
            .rem_euclid(i64::from(self.scroll_area)) as u16;
        self.send_command(VSCRSADD, &line.to_be_bytes())
    }

    /// Current (top, area) of the scroll window.
    pub fn scroll_window(&self) -> (u16, u16) {
        (self.scroll_top, self.scroll_area)
    }
}
