//! # Main driver struct
//!
//! [`Tft`] owns the backend and the delay and keeps the panel geometry. It speaks the
//! command/data protocol both controllers share:
//!
//!  - a command is one opcode byte sent with DC low, followed by its parameter bytes with DC
//!    high, all inside one CS low period
//!  - pixels are written by setting a column range (`CASET`) and a row range (`RASET`), then
//!    sending `RAMWR` and streaming one big-endian RGB565 word per pixel. The controller fills
//!    the window row by row on its own.
//!
//! The drawing functions live in [`crate::draw`], text in [`crate::textmode`] and scrolling in
//! [`crate::scroll`]; they are all methods on [`Tft`].
use hal::blocking::delay::DelayMs;

use crate::{
    backend::{Signal, TftBackend},
    config::Config,
    controller::Controller,
    instructions::prelude::*,
};

// bytes per backend write during pixel bursts, must be even
const BURST_BUFFER: usize = 64;

/// Driver for one ST7735 or ILI9341 display.
pub struct Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    pub(crate) backend: B,
    delay: D,
    config: Config,
    #[cfg(feature = "scroll")]
    pub(crate) scroll_top: u16,
    #[cfg(feature = "scroll")]
    pub(crate) scroll_area: u16,
}

impl<B, D> Tft<B, D>
where
    B: TftBackend,
    D: DelayMs<u16>,
{
    /// Create the driver and initialize the display.
    ///
    /// Arguments:
    ///
    /// - backend: bus and control pins, see [`TftSpiBackend`](crate::TftSpiBackend)
    /// - delay: used for the settle times during initialization
    /// - config: panel size and controller, see [`Config`]
    pub fn new(backend: B, delay: D, config: Config) -> Result<Self, B::Error> {
        let mut tft = Tft {
            backend,
            delay,
            config,
            #[cfg(feature = "scroll")]
            scroll_top: 0,
            #[cfg(feature = "scroll")]
            scroll_area: 0,
        };
        tft.setup(config)?;
        Ok(tft)
    }

    /// Replace the configuration and run the init sequence of its controller.
    ///
    /// Releases RESET first; the reset pulse itself is part of the init sequence. Takes a bit
    /// over 240ms because of the delays in the sequence. Any scroll window is forgotten.
    pub fn setup(&mut self, config: Config) -> Result<(), B::Error> {
        self.config = config;
        #[cfg(feature = "scroll")]
        {
            self.scroll_top = 0;
            self.scroll_area = 0;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "tft: init {} {}x{}",
            config.controller,
            config.width,
            config.height
        );

        self.backend.set_pin(Signal::Reset, true)?;
        for (instruction, params) in config.controller.init_sequence() {
            self.send_command(*instruction, params)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn controller(&self) -> Controller {
        self.config.controller
    }

    /// Give back the backend and the delay.
    pub fn release(self) -> (B, D) {
        (self.backend, self.delay)
    }

    /// Send one instruction with its parameter bytes.
    ///
    /// [`Delay`](Instruction::Delay) waits instead and never touches the bus.
    pub fn send_command(&mut self, instruction: Instruction, params: &[u8]) -> Result<(), B::Error> {
        if let Some(ms) = instruction.delay_ms(params) {
            self.delay.delay_ms(ms);
            return Ok(());
        }

        self.start_command(instruction)?;
        if !params.is_empty() {
            self.backend.write(params)?;
        }
        self.backend.set_pin(Signal::ChipSelect, true)
    }

    // select the chip, send the opcode and leave DC high for parameter or pixel bytes
    fn start_command(&mut self, instruction: Instruction) -> Result<(), B::Error> {
        self.backend.set_pin(Signal::DataCommand, false)?;
        self.backend.set_pin(Signal::ChipSelect, false)?;
        self.backend.write(&[instruction.byte()])?;
        self.backend.set_pin(Signal::DataCommand, true)
    }

    /// True if any of the coordinates lies off screen.
    ///
    /// Coordinates are read pairwise as x, y, x, y.
    pub fn is_out_of_bounds(&self, coords: &[i32]) -> bool {
        let width = i32::from(self.config.width);
        let height = i32::from(self.config.height);
        coords.iter().enumerate().any(|(i, &v)| {
            let limit = if i % 2 == 0 { width } else { height };
            !(0..limit).contains(&v)
        })
    }

    /// Program the window the next pixel burst fills, corners inclusive.
    ///
    /// Does nothing when a corner is off screen. The burst that follows must then be skipped
    /// as well, otherwise it lands in whatever window was set before.
    pub fn set_address_window(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), B::Error> {
        if self.is_out_of_bounds(&[x0, y0, x1, y1]) {
            return Ok(());
        }
        let col = |v: i32| (v as u16).wrapping_add(self.config.col_offset).to_be_bytes();
        let row = |v: i32| (v as u16).wrapping_add(self.config.row_offset).to_be_bytes();
        let (c0, c1, r0, r1) = (col(x0), col(x1), row(y0), row(y1));

        self.send_command(CASET, &[c0[0], c0[1], c1[0], c1[1]])?;
        self.send_command(RASET, &[r0[0], r0[1], r1[0], r1[1]])
    }

    // RAMWR without closing the transaction, so pixel data can follow in any number of writes
    pub(crate) fn begin_ram_write(&mut self) -> Result<(), B::Error> {
        self.start_command(RAMWR)
    }

    pub(crate) fn end_ram_write(&mut self) -> Result<(), B::Error> {
        self.backend.set_pin(Signal::ChipSelect, true)?;
        self.backend.set_pin(Signal::DataCommand, false)
    }

    // stream RGB565 words inside an open RAMWR, batched into BURST_BUFFER sized writes
    pub(crate) fn write_words<I>(&mut self, words: I) -> Result<(), B::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        let mut buffer = [0u8; BURST_BUFFER];
        let mut len = 0;
        for word in words {
            buffer[len..len + 2].copy_from_slice(&word.to_be_bytes());
            len += 2;
            if len == BURST_BUFFER {
                self.backend.write(&buffer)?;
                len = 0;
            }
        }
        if len > 0 {
            self.backend.write(&buffer[..len])?;
        }
        Ok(())
    }
}
