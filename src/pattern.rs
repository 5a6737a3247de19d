//! Compile-time letter images for the panel.
//!
//! A [`Pattern`] is an immutable `(row, col)` grid of colors; the
//! [`controller`](crate::controller) maps it through the panel layout into a
//! frame. Adding a letter means adding a constant and a [`PatternId`] variant;
//! the state machine itself is untouched.

use crate::frame::{Rgb, colors};

/// Identity of a selectable pattern, one per trigger button.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PatternId {
    /// The letter "A", shown for button A.
    A,
    /// The letter "B", shown for button B.
    B,
}

impl PatternId {
    /// Number of selectable patterns.
    pub const COUNT: usize = 2;

    /// Position of this pattern in a pattern table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An immutable W×H grid of [`Rgb`] values representing one displayable image.
///
/// Rows are listed top-to-bottom, columns left-to-right; the panel layout, not
/// the pattern, decides where each cell lands on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pattern<const W: usize, const H: usize> {
    rows: [[Rgb; W]; H],
}

impl<const W: usize, const H: usize> Pattern<W, H> {
    /// Create a pattern from row-major grid data.
    #[must_use]
    pub const fn new(rows: [[Rgb; W]; H]) -> Self {
        Self { rows }
    }

    /// Color of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Out-of-grid coordinates panic.
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "asserted in range")]
    pub const fn color_at(&self, row: usize, col: usize) -> Rgb {
        assert!(row < H, "row out of bounds");
        assert!(col < W, "column out of bounds");
        self.rows[row][col]
    }
}

/// The letter "A" in red on a 5×5 grid.
pub const LETTER_A: Pattern<5, 5> = {
    const X: Rgb = colors::RED;
    const O: Rgb = colors::BLACK;
    Pattern::new([
        [O, X, X, X, O],
        [X, O, O, O, X],
        [X, O, O, O, X],
        [X, X, X, X, X],
        [X, O, O, O, X],
    ])
};

/// The letter "B" in blue on a 5×5 grid.
pub const LETTER_B: Pattern<5, 5> = {
    const X: Rgb = Rgb::new(0, 85, 255);
    const O: Rgb = colors::BLACK;
    Pattern::new([
        [X, X, X, X, O],
        [X, O, O, O, X],
        [X, X, X, X, O],
        [X, O, O, O, X],
        [X, X, X, X, O],
    ])
};
