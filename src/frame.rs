//! Pixel buffer for one LED panel frame.
//!
//! A [`Frame`] holds exactly one color per LED in wire (storage) order and has
//! no protocol knowledge; the [`serializer`](crate::serializer) consumes it in
//! that exact order.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// [`Rgb`] pixel data for an N-LED panel, in wire order.
///
/// Frames deref to `[Rgb; N]`, so pixels can be read and mutated directly.
/// A frame is overwritten in place every display cycle, never reallocated.
///
/// ```rust
/// use letter_panel::frame::{Frame, colors};
///
/// let mut frame = Frame::<25>::new();
/// frame.set(3, colors::RED);
/// assert_eq!(frame[3], colors::RED);
/// frame.clear();
/// assert!(frame.iter().all(|&color| color == colors::BLACK));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Overwrite the color stored at `index`.
    ///
    /// # Panics
    ///
    /// An index past the end is a caller contract violation and panics.
    #[expect(clippy::indexing_slicing, reason = "asserted in range")]
    pub const fn set(&mut self, index: usize, color: Rgb) {
        assert!(index < N, "pixel index out of bounds");
        self.0[index] = color;
    }

    /// Set every pixel to black.
    ///
    /// Run before and after every pattern display so no stale pixels persist
    /// across frames.
    pub const fn clear(&mut self) {
        self.0 = [Rgb::new(0, 0, 0); N];
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame<N>> for [Rgb; N] {
    fn from(frame: Frame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
