#![warn(missing_docs)]

//! # Word hunt
//!
//! A crate for generating word search puzzles and playing them.
//!
//! [`generate`] hides a list of words in a grid of letters, each word running along one of eight [`Direction`]s.
//! Words may cross where they share a letter. Words that can't be fit in after a bounded number of random attempts
//! are left out and reported in [`Puzzle::dropped`]. A [`Session`] tracks a player's selections against a puzzle.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let puzzle = word_hunt::generate(&["CAT", "DOG"], 5, 5, &mut rng).unwrap();
//!
//! for placement in puzzle.placements() {
//!     let spelled: String = placement.cells().into_iter().map(|cell| puzzle[cell]).collect();
//!     assert_eq!(spelled, placement.word);
//! }
//! ```

mod direction;
mod generator;
mod session;
mod span;

pub use direction::Direction;
pub use generator::{generate, Puzzle, PuzzleConfig};
pub use session::{Selection, Session};
pub use span::{WordPlacement, WordSpan};

/// An error that happened when generating a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// No words were given, so there would be nothing to find.
    #[display("no words were given to hide in the grid")]
    EmptyWordList,

    /// The grid would have no rows or no columns.
    #[display("grid dimensions {rows} rows x {cols} columns must both be positive")]
    InvalidDimensions {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
    },
}
