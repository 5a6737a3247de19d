//! Push-button letter display for serpentine-wired NeoPixel-style (WS2812) LED matrices.
//!
//! The crate splits into a platform-independent core and a thin hardware binding:
//!
//! - [`layout`] maps `(row, col)` grid coordinates to LED strip order for
//!   serpentine-wired panels.
//! - [`frame`] holds one [`Rgb`](frame::Rgb) value per LED with no protocol knowledge.
//! - [`serializer`] turns a frame into the green-red-blue byte stream the
//!   single-wire protocol requires and enforces the inter-frame reset gap.
//! - [`controller`] is the polling state machine: it samples two buttons,
//!   debounces them, renders the selected [`pattern`], and transmits.
//! - `button` and `line_driver` (board features only) bind the core to
//!   GPIO inputs and a PIO state machine on the Pico.
//!
//! The core builds and tests on the host with no features enabled; enable the
//! `embedded` feature (and a thumb target) for the firmware build. See
//! `demos/letter_display.rs` for the wired-up application.
#![no_std]

// Compile-time check: at most one board may be selected.
#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod button;
pub mod controller;
mod error;
pub mod frame;
pub mod layout;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod line_driver;
pub mod pattern;
pub mod serializer;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
