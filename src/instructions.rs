//! # Instruction set used by the driver
//!
//! Only the commands this driver sends are listed. Names follow the ST7735R and ILI9341 data
//! sheets; where both controllers share an opcode (addressing, memory write, sleep, display on)
//! the meaning is the same. Some opcodes in the 0xB0..0xF7 range are vendor registers that only
//! one of the two controllers understands, see [`crate::controller`] for which one is sent where.
//!
//! Besides real opcodes there is [`Instruction::Delay`], a pseudo command that lets the init
//! tables encode the settle times the controllers need between steps. It never reaches the bus.

/// Every command the driver issues, plus the `Delay` pseudo command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Instruction {
    /// software reset
    SWRESET = 0x01,
    /// sleep out
    SLPOUT = 0x11,
    /// gamma curve select (ILI9341)
    GMCRV = 0x26,
    /// display on
    DISPON = 0x29,
    /// column address set, 4 parameter bytes
    CASET = 0x2A,
    /// row (page) address set, 4 parameter bytes
    RASET = 0x2B,
    /// memory write, followed by pixel data
    RAMWR = 0x2C,
    /// vertical scrolling definition, 6 parameter bytes
    VSCRDEF = 0x33,
    /// memory data access control
    MADCTL = 0x36,
    /// vertical scrolling start address, 2 parameter bytes
    VSCRSADD = 0x37,
    /// interface pixel format
    COLMOD = 0x3A,
    /// frame rate control, normal mode
    FRMCTR1 = 0xB1,
    /// frame rate control, idle mode
    FRMCTR2 = 0xB2,
    /// frame rate control, partial mode
    FRMCTR3 = 0xB3,
    /// display inversion control
    INVCTR = 0xB4,
    /// display function control (ILI9341)
    DFCTL = 0xB6,
    PWCTR1 = 0xC0,
    PWCTR2 = 0xC1,
    PWCTR3 = 0xC2,
    PWCTR4 = 0xC3,
    PWCTR5 = 0xC4,
    /// VCOM control 1
    VMCTR1 = 0xC5,
    /// VCOM control 2 (ILI9341)
    VMCTR2 = 0xC7,
    /// power control A (ILI9341)
    PWCTRA = 0xCB,
    /// power control B (ILI9341)
    PWCTRB = 0xCF,
    /// positive gamma correction
    GMCTRP1 = 0xE0,
    /// negative gamma correction
    GMCTRN1 = 0xE1,
    /// driver timing control A (ILI9341)
    DTCTRA = 0xE8,
    /// driver timing control B (ILI9341)
    DTCTRB = 0xEA,
    /// power on sequence control (ILI9341)
    POSEQ = 0xED,
    /// enable 3 gamma control (ILI9341)
    GAMFUN = 0xF2,
    /// pump ratio control (ILI9341)
    PMPRTO = 0xF7,
    /// Wait for the first parameter byte in milliseconds, or [`DEFAULT_DELAY_MS`] without one.
    Delay = 0xFF,
}

/// Wait time of a [`Instruction::Delay`] that carries no parameter.
pub const DEFAULT_DELAY_MS: u16 = 500;

use Instruction::*;

impl Instruction {
    /// The opcode byte put on the wire.
    ///
    /// `Delay` maps to 0xFF, which neither controller uses; it is never sent.
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// How long a `Delay` with these parameters waits, `None` for real commands.
    pub fn delay_ms(self, params: &[u8]) -> Option<u16> {
        match self {
            Delay => Some(params.first().map_or(DEFAULT_DELAY_MS, |&ms| ms.into())),
            _ => None,
        }
    }
}

/// A prelude for convenience, it pulls the instruction enum and its variants into scope.
pub mod prelude {
    pub use super::{Instruction, Instruction::*, DEFAULT_DELAY_MS};
}
