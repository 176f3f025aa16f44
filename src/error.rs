//! Errors that are not plain backend errors.
//!
//! Almost every driver call returns the backend's own error type. Drawing never fails for
//! geometric reasons: coordinates off screen are dropped or clipped without an error.

/// Failure while filling a rectangle with random pixels.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RandomFillError<BusErr, RngErr> {
    /// the backend failed to write
    Bus(BusErr),
    /// the random source failed to deliver bytes
    Rng(RngErr),
}
