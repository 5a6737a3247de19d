//! Mapping from `(row, col)` grid coordinates to LED strip order for
//! serpentine-wired panels.
//!
//! See [`SerpentineLayout`] for the mapping rule and examples.

/// Compile-time description of a serpentine-wired W×H panel.
///
/// Serpentine (boustrophedon) wiring chains physical LED `n` to LED `n + 1`
/// while alternating scan direction per row: even rows run left-to-right,
/// odd rows right-to-left. [`index`](Self::index) converts screen-style
/// `(row, col)` coordinates (`(0, 0)` top-left) into the linear position a
/// pixel occupies on the wire.
///
/// The mapping is a pure `const fn`, so pattern tables can be pre-mapped at
/// compile time and the function is independently testable.
///
/// # Example
///
/// ```rust
/// use letter_panel::layout::SerpentineLayout;
///
/// type Panel5x5 = SerpentineLayout<25, 5, 5>;
///
/// // Row 0 is even: left-to-right.
/// const _: () = assert!(Panel5x5::index(0, 0) == 0);
/// const _: () = assert!(Panel5x5::index(0, 4) == 4);
/// // Row 1 is odd: right-to-left.
/// const _: () = assert!(Panel5x5::index(1, 4) == 5);
/// const _: () = assert!(Panel5x5::index(1, 0) == 9);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerpentineLayout<const N: usize, const W: usize, const H: usize>;

impl<const N: usize, const W: usize, const H: usize> SerpentineLayout<N, W, H> {
    /// Number of columns in the panel.
    pub const WIDTH: usize = W;

    /// Number of rows in the panel.
    pub const HEIGHT: usize = H;

    /// Total number of LEDs in the panel.
    pub const LEN: usize = N;

    /// Linear wire position of the LED at `(row, col)`.
    ///
    /// Even rows map to `row * W + col`, odd rows to `row * W + (W - 1 - col)`.
    /// The result is a bijection over the grid: every cell maps to exactly one
    /// position in `[0, N)`.
    ///
    /// # Panics
    ///
    /// Out-of-grid coordinates are a caller contract violation and panic;
    /// they are never clamped.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "the asserts keep row and col inside the W x H grid"
    )]
    pub const fn index(row: usize, col: usize) -> usize {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(row < H, "row out of bounds");
        assert!(col < W, "column out of bounds");

        if row % 2 == 0 {
            row * W + col
        } else {
            row * W + (W - 1 - col)
        }
    }
}
