//! Write-only software SPI over two GPIO pins.
//!
//! The TFT controllers are only ever written to in this driver, so MISO is not needed.
//! Use [`BitBangSpi::new()`] when the pin toggling is slow enough on its own and
//! [`BitBangSpi::with_delay()`] on fast cores where SCK would otherwise run past what the
//! controller accepts.

use core::marker::PhantomData;

use hal::blocking::delay::DelayUs;
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

/// SPI mode 0 driven by toggling MOSI and SCK by hand.
pub struct BitBangSpi<ERR, MOSI, SCK, DELAY> {
    mosi: MOSI,
    sck: SCK,
    delay: DELAY,
    _phantom: PhantomData<ERR>,
}

/// Half-period delay that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayUs<u8> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u8) {}
}

impl<ERR, MOSI, SCK> BitBangSpi<ERR, MOSI, SCK, NoDelay>
where
    MOSI: OutputPin<Error = ERR>,
    SCK: OutputPin<Error = ERR>,
{
    /// Takes the data and clock pins and parks the clock low.
    pub fn new(mosi: MOSI, sck: SCK) -> Result<Self, ERR> {
        BitBangSpi::with_delay(mosi, sck, NoDelay)
    }
}

impl<ERR, MOSI, SCK, DELAY> BitBangSpi<ERR, MOSI, SCK, DELAY>
where
    MOSI: OutputPin<Error = ERR>,
    SCK: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    /// Like [`new()`](BitBangSpi::new), but waits 1us on each clock edge.
    ///
    /// ```ignore
    /// let spi = BitBangSpi::with_delay(mosi, sck, timer.delay())?;
    /// ```
    pub fn with_delay(mosi: MOSI, mut sck: SCK, delay: DELAY) -> Result<Self, ERR> {
        sck.set_low()?;
        Ok(BitBangSpi {
            mosi,
            sck,
            delay,
            _phantom: PhantomData,
        })
    }

    pub fn release(self) -> (MOSI, SCK, DELAY) {
        (self.mosi, self.sck, self.delay)
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.mosi.set_high()?;
        } else {
            self.mosi.set_low()?;
        }
        self.sck.set_high()?;
        self.delay.delay_us(1);
        self.sck.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<ERR, MOSI, SCK, DELAY> SpiWrite<u8> for BitBangSpi<ERR, MOSI, SCK, DELAY>
where
    MOSI: OutputPin<Error = ERR>,
    SCK: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    type Error = ERR;

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &word in words {
            for bit in (0..8).rev() {
                self.write_bit(word & (1 << bit) != 0)?;
            }
        }
        Ok(())
    }
}
