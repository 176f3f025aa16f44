//! Display geometry and controller selection.

use crate::controller::Controller;

/// Everything the driver needs to know about the attached panel.
///
/// [`Config::default()`] is a 128x160 ST7735 module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Visible width in pixels.
    pub width: u16,
    /// Visible height in pixels.
    pub height: u16,
    pub controller: Controller,
    /// Added to every column address. Some modules (e.g. the Adafruit 1.44") do not map
    /// column 0 of the frame memory to the first visible column.
    pub col_offset: u16,
    /// Added to every row address.
    pub row_offset: u16,
}

impl Config {
    /// Config for the controller's native panel size without offsets.
    pub fn new(controller: Controller) -> Self {
        let (width, height) = controller.native_size();
        Config {
            width,
            height,
            controller,
            col_offset: 0,
            row_offset: 0,
        }
    }

    pub fn size(self, width: u16, height: u16) -> Self {
        Config {
            width,
            height,
            ..self
        }
    }

    pub fn offset(self, col_offset: u16, row_offset: u16) -> Self {
        Config {
            col_offset,
            row_offset,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Controller::St7735)
    }
}
