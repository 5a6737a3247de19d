//! PIO-backed line driver for NeoPixel-style (WS2812) LEDs.
//!
//! One PIO state machine turns each FIFO byte into a bit-timed pulse train on
//! the data line at the fixed 800 kHz protocol rate. The FIFO gives the
//! "accept one byte, block until ready" contract the
//! [`serializer`](crate::serializer) relies on: when it fills, the caller
//! stalls until the wire catches up.

use embassy_futures::block_on;
use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::{Duration, block_for};
use fixed::FixedU32;
use fixed::types::extra::U8;

use crate::serializer::LineDriver;
use crate::{Error, Result};

/// WS2812 data rate.
const BIT_RATE_HZ: u32 = 800_000;

/// PIO cycles per transmitted bit (the 2/5/3 timing split below).
const CYCLES_PER_BIT: u32 = 10;

/// A WS2812 data line driven by one PIO state machine.
pub struct PioLineDriver<'d, PIO: Instance, const SM: usize> {
    state_machine: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioLineDriver<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine on `pin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PioProgramLoad`] if the PIO's instruction memory has
    /// no room left for the program.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut state_machine: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Result<Self> {
        // One data wire on one side-set bit. A bit occupies a 10-cycle
        // window: 2 cycles high, then 5 cycles at the bit value, then 3
        // cycles low.
        let program = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap",
        );
        let loaded = common
            .try_load_program(&program.program)
            .map_err(Error::PioProgramLoad)?;

        let out_pin = common.make_pio_pin(pin);
        let mut config = Config::default();
        config.use_program(&loaded, &[&out_pin]);
        #[expect(
            clippy::cast_precision_loss,
            clippy::arithmetic_side_effects,
            reason = "clk_sys is far below 2^24 kHz and the bit-rate product is constant"
        )]
        let divider = clk_sys_freq() as f32 / (BIT_RATE_HZ * CYCLES_PER_BIT) as f32;
        config.clock_divider = FixedU32::<U8>::from_num(divider);
        // The serializer never reads back; give the whole FIFO to TX so
        // backpressure kicks in as late as possible.
        config.fifo_join = FifoJoin::TxOnly;
        config.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };
        state_machine.set_config(&config);
        state_machine.set_pin_dirs(Direction::Out, &[&out_pin]);
        state_machine.set_enable(true);

        Ok(Self { state_machine })
    }
}

impl<PIO: Instance, const SM: usize> LineDriver for PioLineDriver<'_, PIO, SM> {
    #[expect(clippy::arithmetic_side_effects, reason = "shift by a constant 24")]
    fn write_byte(&mut self, byte: u8) {
        // Left-shifting autopull takes the word's top bits first; park the
        // byte there. The push blocks while the FIFO is full.
        block_on(self.state_machine.tx().wait_push(u32::from(byte) << 24));
    }

    fn hold_idle(&mut self, duration: Duration) {
        // Queued bytes are still draining when the last push returns; the
        // reset gap starts once the wire goes quiet.
        while !self.state_machine.tx().empty() {}
        block_for(duration);
    }
}
