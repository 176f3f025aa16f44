//! # Bus backends
//!
//! The driver never touches pins or the SPI peripheral directly. It talks to a [`TftBackend`],
//! which can drive one of three control lines and shift bytes out on the data line.
//! Whether a byte is a command or data is decided by the level of the DC line at the time it is
//! written, so the driver always sets DC before writing.
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

/// Control lines of the display, next to the SPI clock and data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// CS, active low. The controller ignores the bus while it is high.
    ChipSelect,
    /// DC, low for a command byte, high for data bytes.
    DataCommand,
    /// RESET, active low.
    Reset,
}

/// Raw transport used by the driver.
pub trait TftBackend {
    type Error;

    /// Drive `signal` high or low.
    fn set_pin(&mut self, signal: Signal, high: bool) -> Result<(), Self::Error>;

    /// Shift `bytes` out, most significant bit first.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBackendError<PinErr, SpiErr> {
    Pin(PinErr),
    Spi(SpiErr),
}

/// Backend over any blocking SPI implementation and three GPIO output pins.
///
/// `SPI` can be a hardware peripheral configured with [`SPI_MODE`](crate::SPI_MODE) and
/// [`SPI_FREQUENCY_HZ`](crate::SPI_FREQUENCY_HZ), or a [`BitBangSpi`](crate::BitBangSpi) when
/// MOSI and SCK are plain GPIO pins. Use [`DummyOutputPin`](crate::DummyOutputPin) for a line that
/// is hard-wired on the board.
pub struct TftSpiBackend<SPI, CS, DC, RST>
where
    SPI: SpiWrite<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
}

impl<SPI, CS, DC, RST, PinErr, SpiErr> TftSpiBackend<SPI, CS, DC, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    /// Takes ownership of the bus and pins. The display is deselected right away.
    pub fn new(spi: SPI, mut cs: CS, dc: DC, rst: RST) -> Result<Self, PinErr> {
        cs.set_high()?;
        Ok(TftSpiBackend { spi, cs, dc, rst })
    }

    /// Give back the bus and pins.
    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }
}

impl<SPI, CS, DC, RST, PinErr, SpiErr> TftBackend for TftSpiBackend<SPI, CS, DC, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    type Error = SpiBackendError<PinErr, SpiErr>;

    fn set_pin(&mut self, signal: Signal, high: bool) -> Result<(), Self::Error> {
        let result = match (signal, high) {
            (Signal::ChipSelect, true) => self.cs.set_high(),
            (Signal::ChipSelect, false) => self.cs.set_low(),
            (Signal::DataCommand, true) => self.dc.set_high(),
            (Signal::DataCommand, false) => self.dc.set_low(),
            (Signal::Reset, true) => self.rst.set_high(),
            (Signal::Reset, false) => self.rst.set_low(),
        };
        result.map_err(SpiBackendError::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(SpiBackendError::Spi)
    }
}
