//! The display state machine.
//!
//! [`DisplayController`] owns the frame buffer and the serializer, samples two
//! buttons once per polling tick, debounces them with per-button hold timers,
//! and renders the selected [`Pattern`] through the serpentine layout. Time is
//! passed into [`tick`](DisplayController::tick) by the caller, so the state
//! machine stays deterministic under test.

use embassy_time::{Duration, Instant};

use crate::frame::Frame;
use crate::layout::SerpentineLayout;
use crate::pattern::{Pattern, PatternId};
use crate::serializer::{LineDriver, LineSerializer};

/// Edges from the same button are dropped for this long after a press
/// registers. Purely time-based; suppressed edges are never queued.
pub const DEBOUNCE_HOLD: Duration = Duration::from_millis(200);

/// How long a rendered pattern stays on the panel before the controller
/// blanks it and returns to idle.
pub const DISPLAY_HOLD: Duration = Duration::from_millis(200);

/// What the panel is currently showing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum DisplayState {
    /// All-off frame on the wire; initial state.
    Idle,
    /// A pattern is on the panel until its display hold elapses.
    Displaying(PatternId),
}

/// Button levels sampled for one tick; `true` = pressed.
///
/// The electrical debounce window is enforced by the controller, so raw
/// levels are fine here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Buttons {
    /// Button A (shows the first pattern; evaluated before B).
    pub a: bool,
    /// Button B (shows the second pattern).
    pub b: bool,
}

/// Polling state machine for an N-LED, W×H serpentine panel.
///
/// One full render-then-transmit cycle runs per accepted press and is atomic
/// with respect to button sampling: buttons are only looked at between
/// cycles, never mid-transmit. The transmit step is the only step that
/// blocks (protocol backpressure).
pub struct DisplayController<D, const N: usize, const W: usize, const H: usize> {
    frame: Frame<N>,
    serializer: LineSerializer<D>,
    patterns: [&'static Pattern<W, H>; PatternId::COUNT],
    state: DisplayState,
    /// When the current `Displaying` hold ends.
    idle_at: Instant,
    /// Next instant at which each button's edges register again.
    ready_a: Instant,
    ready_b: Instant,
}

impl<D: LineDriver, const N: usize, const W: usize, const H: usize> DisplayController<D, N, W, H> {
    /// Create the controller, clear the buffer, and transmit one all-off
    /// frame so nothing stale from before reset lingers on the panel.
    ///
    /// `patterns` is indexed by [`PatternId`]: the pattern for button A
    /// first, then button B.
    ///
    /// # Panics
    ///
    /// Panics unless `W * H == N`.
    #[expect(clippy::arithmetic_side_effects, reason = "checked dimension product")]
    pub fn new(driver: D, patterns: [&'static Pattern<W, H>; PatternId::COUNT]) -> Self {
        assert!(W * H == N, "W*H must equal N");
        let mut controller = Self {
            frame: Frame::new(),
            serializer: LineSerializer::new(driver),
            patterns,
            state: DisplayState::Idle,
            idle_at: Instant::MIN,
            ready_a: Instant::MIN,
            ready_b: Instant::MIN,
        };
        controller.serializer.transmit(&controller.frame);
        controller
    }

    /// Run one polling tick at time `now` and return the resulting state.
    ///
    /// Button A is always evaluated first; if both buttons are asserted in
    /// the same tick, both patterns are rendered A-then-B and B's frame is
    /// the one left visible. A press inside a button's debounce window is
    /// dropped. With nothing pressed, the panel is blanked once the display
    /// hold elapses; the all-off frame is transmitted on that transition
    /// only, not on every idle tick.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "millisecond offsets from `now` cannot overflow an Instant"
    )]
    pub fn tick(&mut self, now: Instant, buttons: Buttons) -> DisplayState {
        let mut shown = false;

        if buttons.a && now >= self.ready_a {
            self.show(PatternId::A, now);
            self.ready_a = now + DEBOUNCE_HOLD;
            shown = true;
        }
        if buttons.b && now >= self.ready_b {
            self.show(PatternId::B, now);
            self.ready_b = now + DEBOUNCE_HOLD;
            shown = true;
        }

        if !shown && self.state != DisplayState::Idle && now >= self.idle_at {
            self.blank();
        }

        self.state
    }

    /// Render `id`'s pattern through the serpentine layout and transmit it.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "millisecond offsets from `now` cannot overflow an Instant"
    )]
    #[expect(
        clippy::indexing_slicing,
        reason = "the table length is PatternId::COUNT"
    )]
    fn show(&mut self, id: PatternId, now: Instant) {
        let pattern = self.patterns[id.index()];
        self.frame.clear();
        for row in 0..H {
            for col in 0..W {
                self.frame
                    .set(SerpentineLayout::<N, W, H>::index(row, col), pattern.color_at(row, col));
            }
        }
        self.serializer.transmit(&self.frame);
        self.state = DisplayState::Displaying(id);
        self.idle_at = now + DISPLAY_HOLD;
    }

    /// Transmit the all-off frame and return to idle.
    fn blank(&mut self) {
        self.frame.clear();
        self.serializer.transmit(&self.frame);
        self.state = DisplayState::Idle;
    }

    /// Current state without advancing time.
    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// The most recently rendered frame, in wire order.
    #[must_use]
    pub const fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    /// Borrow the underlying line driver (mock inspection in tests).
    #[must_use]
    pub const fn driver(&self) -> &D {
        self.serializer.driver()
    }
}
