//! Momentary push buttons read as plain levels.
//!
//! The controller's polling loop samples button levels once per tick and does
//! its own time-based debouncing, so this wrapper only configures the pull
//! resistor and answers "is it pressed right now".

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pull};

/// Which rail the button shorts its pin to when pressed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Pin to 3.3V through the button; the internal pull-down holds it low
    /// otherwise, so a press reads HIGH.
    ///
    /// RP2350 erratum E9 can leave a pulled-down pin stuck HIGH after
    /// release; wire buttons to ground on a Pico 2.
    Voltage,

    /// Pin to GND through the button; the internal pull-up holds it high
    /// otherwise, so a press reads LOW.
    Ground,
}

/// A push button on one GPIO pin.
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # #[panic_handler]
/// # fn panic(_: &core::panic::PanicInfo) -> ! { loop {} }
/// use letter_panel::button::{Button, PressedTo};
///
/// fn example(p: embassy_rp::Peripherals) {
///     let button = Button::new(p.PIN_5, PressedTo::Ground);
///     let _pressed_now = button.is_pressed();
/// }
/// ```
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> Button<'a> {
    /// Claims `pin` as an input with the pull resistor the wiring implies:
    /// pull-down for [`PressedTo::Voltage`], pull-up for
    /// [`PressedTo::Ground`].
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Samples the pin and folds the level through the wiring polarity.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
    }
}
