//! # Placeholder output pin
//!
//! Many breakout boards tie RESET to VCC or CS to ground, and some hosts manage the chip select
//! inside their SPI peripheral. [`TftSpiBackend`](crate::TftSpiBackend) still wants a pin for
//! each line, so hand it a [`DummyOutputPin`] for any line that is not wired to the MCU.

use hal::digital::v2::OutputPin;

/// An `OutputPin` that accepts every level change and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyOutputPin;

impl OutputPin for DummyOutputPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
