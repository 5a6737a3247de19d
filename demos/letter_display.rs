//! 5×5 letter display: button A shows a red "A", button B a blue "B".
//!
//! Wiring (BitDogLab board): LED data on GPIO 7, buttons to ground on
//! GPIO 5 (A) and GPIO 6 (B).
#![no_std]
#![no_main]

use core::convert::Infallible;
use core::panic;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_time::{Duration, Instant, Timer};
use letter_panel::Result;
use letter_panel::button::{Button, PressedTo};
use letter_panel::controller::{Buttons, DisplayController, DisplayState};
use letter_panel::line_driver::PioLineDriver;
use letter_panel::pattern::{LETTER_A, LETTER_B};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

const WIDTH: usize = 5;
const HEIGHT: usize = 5;
const LED_COUNT: usize = WIDTH * HEIGHT;

/// Pause between button samples; short enough to feel instant, long enough
/// to avoid flickering the idle blank frame.
const TICK_PERIOD: Duration = Duration::from_millis(100);

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    // The inner loop only returns by failing.
    #[expect(clippy::unwrap_used, reason = "the Ok arm is Infallible")]
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let driver = PioLineDriver::new(&mut common, sm0, p.PIN_7)?;

    // Buttons are wired to GND (Pico 2 erratum E9 is avoided that way).
    let button_a = Button::new(p.PIN_5, PressedTo::Ground);
    let button_b = Button::new(p.PIN_6, PressedTo::Ground);

    let mut controller =
        DisplayController::<_, LED_COUNT, WIDTH, HEIGHT>::new(driver, [&LETTER_A, &LETTER_B]);
    info!("letter display ready");

    let mut last_state = DisplayState::Idle;
    loop {
        let buttons = Buttons {
            a: button_a.is_pressed(),
            b: button_b.is_pressed(),
        };
        let state = controller.tick(Instant::now(), buttons);
        if state != last_state {
            info!("display state: {}", state);
            last_state = state;
        }
        Timer::after(TICK_PERIOD).await;
    }
}
