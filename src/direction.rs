use std::fmt::Display;

use rand::Rng;

/// The direction a word is placed in inside the grid.
///
/// Rows grow downwards and columns grow to the right, so [`Direction::Vertical`] reads top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,

    /// Top to bottom along a column.
    Vertical,

    /// Diagonally down and to the right.
    DiagonalDown,

    /// Diagonally up and to the right.
    DiagonalUp,

    /// Right to left along a row.
    HorizontalReverse,

    /// Bottom to top along a column.
    VerticalReverse,

    /// Diagonally up and to the left.
    DiagonalDownReverse,

    /// Diagonally down and to the left.
    DiagonalUpReverse,
}

impl Direction {
    /// Every direction, forward ones first.
    pub const ALL: [Direction; 8] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
        Direction::HorizontalReverse,
        Direction::VerticalReverse,
        Direction::DiagonalDownReverse,
        Direction::DiagonalUpReverse,
    ];

    /// Directions that read left to right, or top to bottom for [`Direction::Vertical`].
    pub const FORWARD: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// The `(row, column)` step taken between consecutive letters.
    pub fn delta(self) -> (isize, isize) {
        use Direction::*;

        match self {
            Horizontal => (0, 1),
            Vertical => (1, 0),
            DiagonalDown => (1, 1),
            DiagonalUp => (-1, 1),
            HorizontalReverse => (0, -1),
            VerticalReverse => (-1, 0),
            DiagonalDownReverse => (-1, -1),
            DiagonalUpReverse => (1, -1),
        }
    }

    /// Looks up the direction with the given `(row, column)` step.
    pub fn from_delta(row_delta: isize, column_delta: isize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (row_delta, column_delta))
    }

    /// The kebab-case name of the direction, e.g. `"diagonal-up-reverse"`.
    pub fn name(self) -> &'static str {
        use Direction::*;

        match self {
            Horizontal => "horizontal",
            Vertical => "vertical",
            DiagonalDown => "diagonal-down",
            DiagonalUp => "diagonal-up",
            HorizontalReverse => "horizontal-reverse",
            VerticalReverse => "vertical-reverse",
            DiagonalDownReverse => "diagonal-down-reverse",
            DiagonalUpReverse => "diagonal-up-reverse",
        }
    }

    /// Whether this is one of the [`Direction::FORWARD`] directions.
    pub fn is_forward(self) -> bool {
        Self::FORWARD.contains(&self)
    }

    /// Returns a uniformly random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Returns a uniformly random forward direction.
    pub fn random_forward<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::FORWARD[rng.gen_range(0..Self::FORWARD.len())]
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
