//! # Supported controllers and their init sequences
//!
//! Both sequences come from vendor reference code and are replayed byte for byte. The power,
//! VCOM and gamma values are tuned for the panels these controllers ship with; changing them can
//! leave a panel dark, washed out or mirrored.
//!
//! Both start with the same reset pulse, issued as `SWRESET` commands with a 1/0/1 parameter and
//! 1, 1 and 120 ms pauses, and both end with 16 bits per pixel (`COLMOD`) and the display
//! switched on. The `MADCTL` value fixes the scan direction the address window relies on.

use crate::instructions::prelude::*;

/// One step of an init sequence: an instruction and its parameter bytes.
pub type Step = (Instruction, &'static [u8]);

/// Controller chip on the display module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    /// Sitronix ST7735, 128x160 and 128x128 modules
    St7735,
    /// Ilitek ILI9341, 240x320 modules
    Ili9341,
}

impl Controller {
    /// The init sequence for this controller.
    pub fn init_sequence(self) -> &'static [Step] {
        match self {
            Controller::St7735 => ST7735_INIT,
            Controller::Ili9341 => ILI9341_INIT,
        }
    }

    /// Native (width, height) of the panels this controller is sold with.
    pub fn native_size(self) -> (u16, u16) {
        match self {
            Controller::St7735 => (128, 160),
            Controller::Ili9341 => (240, 320),
        }
    }

    /// Number of frame memory lines the vertical scroll definition has to add up to.
    pub fn scroll_lines(self) -> u16 {
        self.native_size().1
    }
}

pub const ST7735_INIT: &[Step] = &[
    // reset pulse
    (SWRESET, &[1]),
    (Delay, &[1]),
    (SWRESET, &[0]),
    (Delay, &[1]),
    (SWRESET, &[1]),
    (Delay, &[120]),
    (SLPOUT, &[]),
    (Delay, &[120]),
    // frame rate: normal, idle, partial (dot inversion)
    (FRMCTR1, &[0x01, 0x2C, 0x2D]),
    (FRMCTR2, &[0x01, 0x2C, 0x2D]),
    (FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
    // no inversion
    (INVCTR, &[0x07]),
    // -4.6V, auto mode
    (PWCTR1, &[0xA2, 0x02, 0x84]),
    // VGH25 = 2.4C, VGSEL = -10, VGH = 3 * AVDD
    (PWCTR2, &[0xC5]),
    (PWCTR3, &[0x0A, 0x00]),
    (PWCTR4, &[0x8A, 0x2A]),
    (PWCTR5, &[0x8A, 0xEE]),
    (VMCTR1, &[0x0E]),
    (MADCTL, &[0xC0]),
    (
        GMCTRP1,
        &[
            0x0F, 0x1A, 0x0F, 0x18, 0x2F, 0x28, 0x20, 0x22, 0x1F, 0x1B, 0x23, 0x37, 0x00, 0x07,
            0x02, 0x10,
        ],
    ),
    (
        GMCTRN1,
        &[
            0x0F, 0x1B, 0x0F, 0x17, 0x33, 0x2C, 0x29, 0x2E, 0x30, 0x30, 0x39, 0x3F, 0x00, 0x07,
            0x03, 0x10,
        ],
    ),
    // 16 bit color
    (COLMOD, &[0x05]),
    (DISPON, &[]),
];

pub const ILI9341_INIT: &[Step] = &[
    // reset pulse
    (SWRESET, &[1]),
    (Delay, &[1]),
    (SWRESET, &[0]),
    (Delay, &[1]),
    (SWRESET, &[1]),
    (Delay, &[120]),
    (PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (PWCTRB, &[0x00, 0xC1, 0x30]),
    (DTCTRA, &[0x85, 0x00, 0x78]),
    (DTCTRB, &[0x00, 0x00]),
    (POSEQ, &[0x64, 0x03, 0x12, 0x81]),
    (PMPRTO, &[0x20]),
    // VRH[5:0]
    (PWCTR1, &[0x23]),
    // SAP[2:0], BT[3:0]
    (PWCTR2, &[0x10]),
    (VMCTR1, &[0x3E, 0x28]),
    (VMCTR2, &[0x86]),
    (MADCTL, &[0x48]),
    // 16 bit color
    (COLMOD, &[0x55]),
    (FRMCTR1, &[0x00, 0x18]),
    (DFCTL, &[0x08, 0x82, 0x27]),
    // 3 gamma off
    (GAMFUN, &[0x00]),
    (GMCRV, &[0x01]),
    (
        GMCTRP1,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        GMCTRN1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    (SLPOUT, &[]),
    (Delay, &[120]),
    (DISPON, &[]),
];
