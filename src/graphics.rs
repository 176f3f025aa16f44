//! embedded-graphics support
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! It implements `DrawTarget` for [`Tft`], so every shape, font and image renderer of the
//! embedded_graphics ecosystem can draw on the display. There is no framebuffer: single pixels
//! go out through [`Tft::draw_pixel()`] and solid areas through [`Tft::fill_rect()`], so filled
//! shapes are much cheaper than outlined ones.
//!  <https://docs.rs/embedded-graphics/latest/embedded_graphics/>
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{raw::RawU16, IntoStorage, Rgb565},
    primitives::Rectangle,
    Pixel,
};
use hal::blocking::delay::DelayMs;

use crate::{backend::TftBackend, color::Color, display::Tft};

impl<B, D> DrawTarget for Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    type Color = Rgb565;
    type Error = B::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.draw_pixel(point.x, point.y, color.into_storage())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            color.into_storage(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.fill_rect(0, 0, width, height, color.into_storage())
    }
}

impl<B, D> OriginDimensions for Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    fn size(&self) -> Size {
        Size::new(self.width().into(), self.height().into())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Rgb565 {
        RawU16::new(color.rgb565()).into()
    }
}
