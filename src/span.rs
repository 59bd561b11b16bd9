use crate::Direction;

/// Describes which cells a word covers in the grid: a beginning coordinate, a length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// The `(row, column)` of the first letter.
    pub begin: (usize, usize),

    /// The number of letters covered.
    pub len: usize,

    /// The direction the word goes in.
    pub direction: Direction,
}

impl WordSpan {
    /// Creates a new [WordSpan] with the given values for the beginning coordinate, the length, and the direction of the word.
    pub fn new(begin: (usize, usize), len: usize, direction: Direction) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// Returns the coordinate of the `i`th letter, or [`Option::None`] if it would have a negative row or column.
    ///
    /// The grid size is not checked here, see [`WordSpan::in_bounds`].
    pub fn cell(&self, i: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        let i = isize::try_from(i).ok()?;

        let row = self.begin.0.checked_add_signed(dr.checked_mul(i)?)?;
        let column = self.begin.1.checked_add_signed(dc.checked_mul(i)?)?;

        Some((row, column))
    }

    /// The coordinate of the last letter. [`Option::None`] for an empty span.
    pub fn end(&self) -> Option<(usize, usize)> {
        self.cell(self.len.checked_sub(1)?)
    }

    /// Returns all coordinates the span covers that have a non-negative row and column, in letter order.
    pub fn indices(&self) -> Vec<(usize, usize)> {
        (0..self.len).map_while(|i| self.cell(i)).collect()
    }

    /// Returns whether every letter of a non-empty span lands inside a grid of the given dimensions.
    pub fn in_bounds(&self, num_rows: usize, num_columns: usize) -> bool {
        let inside = |(row, column): (usize, usize)| row < num_rows && column < num_columns;

        // The span is a straight line, so both ends being inside covers every cell
        self.len > 0 && inside(self.begin) && self.end().is_some_and(inside)
    }
}

/// A word that was placed in the puzzle, along with where it was placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPlacement {
    /// The placed word.
    pub word: String,

    /// The `(row, column)` of the first letter.
    pub start: (usize, usize),

    /// The `(row, column)` of the last letter.
    pub end: (usize, usize),

    /// The direction from `start` to `end`.
    pub direction: Direction,
}

impl WordPlacement {
    /// Creates a placement of `word` along `span`, or [`Option::None`] if the span is empty or leaves the grid
    /// towards a negative coordinate.
    pub fn new(word: impl Into<String>, span: &WordSpan) -> Option<Self> {
        Some(Self {
            word: word.into(),
            start: span.begin,
            end: span.end()?,
            direction: span.direction,
        })
    }

    /// The span this placement covers.
    pub fn span(&self) -> WordSpan {
        WordSpan::new(self.start, self.word.chars().count(), self.direction)
    }

    /// All cells the word covers, from `start` to `end`.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        self.span().indices()
    }

    /// The letters of the word paired with the cell each one occupies.
    pub fn letters(&self) -> impl Iterator<Item = (char, (usize, usize))> + '_ {
        self.word.chars().zip(self.cells())
    }
}
