use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate.
///
/// The display core itself has no recoverable errors: coordinate and index
/// preconditions are programmer errors (they panic), and the LED protocol has
/// no acknowledgment channel, so a transmit cannot report failure. What
/// remains is peripheral setup, which can genuinely fail.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The PIO instruction memory had no room for the line-driver program.
    // `#[error(not(source))]` tells `derive_more` that the wrapped type does
    // not implement `core::error::Error`.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("PIO program load failed: {_0:?}")]
    PioProgramLoad(#[error(not(source))] embassy_rp::pio::LoadError),
}
