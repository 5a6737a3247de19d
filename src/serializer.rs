//! Byte-order serialization for the single-wire LED protocol.
//!
//! The protocol consumes one 8-bit value per color channel, green first, then
//! red, then blue, regardless of how the frame stores its pixels. A frame is
//! latched by holding the line low for [`RESET_HOLD`] after the last byte;
//! skipping that gap corrupts the next frame.

use embassy_time::Duration;

use crate::frame::Frame;

/// Minimum low period that latches a transmitted frame.
///
/// The WS2812 datasheet requires >= 50 µs; 100 µs leaves margin for FIFO
/// drain latency.
pub const RESET_HOLD: Duration = Duration::from_micros(100);

/// The hardware pulse unit that turns bytes into protocol-timed pulses.
///
/// The core's only contract with it is "accept one byte, block until ready
/// for the next". On the Pico this is a PIO state machine
/// (`PioLineDriver` in the `line_driver` module); tests substitute a
/// recording mock.
pub trait LineDriver {
    /// Write one byte to the line.
    ///
    /// Blocks until the hardware can accept it. The stall is protocol
    /// backpressure (intentional flow control), not an error; there is no
    /// acknowledgment channel and no retry.
    fn write_byte(&mut self, byte: u8);

    /// Hold the line idle (low) for at least `duration`.
    fn hold_idle(&mut self, duration: Duration);
}

/// Serializes frames onto a [`LineDriver`] in protocol byte order.
pub struct LineSerializer<D> {
    driver: D,
}

impl<D: LineDriver> LineSerializer<D> {
    /// Wrap a line driver.
    #[must_use]
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Transmit a full frame: 3×N channel bytes in green-red-blue order per
    /// pixel, in frame storage order, followed by the [`RESET_HOLD`] gap.
    ///
    /// The reset hold is unconditional; every return path has latched the
    /// frame. The call blocks on driver backpressure and cannot be cancelled
    /// once begun.
    pub fn transmit<const N: usize>(&mut self, frame: &Frame<N>) {
        for color in frame.iter() {
            self.driver.write_byte(color.g);
            self.driver.write_byte(color.r);
            self.driver.write_byte(color.b);
        }
        self.driver.hold_idle(RESET_HOLD);
    }

    /// Borrow the underlying driver.
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }
}
