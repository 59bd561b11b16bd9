use std::{
    collections::{BTreeSet, HashSet},
    fmt::Display,
    ops::Index,
};

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};

use crate::{Direction, Error, WordPlacement, WordSpan};

/// The configuration for generating a puzzle. See [`Puzzle::generate`] for details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// How many random positions and directions are tried for each word before it is dropped.
    pub max_attempts: usize,

    /// Whether backward-facing directions are allowed. Backward-facing directions are any direction that is read
    /// right-to-left or down-to-up.
    pub allow_backward_words: bool,

    /// Whether to fill empty (non-word) cells with only letters that appear in the given list of words instead of
    /// the whole alphabet.
    pub use_only_given_letters_in_grid: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            num_rows: 15,
            num_columns: 12,
            max_attempts: 100,
            allow_backward_words: true,
            use_only_given_letters_in_grid: false,
        }
    }
}

/// A generated puzzle: a grid of uppercase letters, the words hidden in it, and the words that could not be placed.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Array2D<char>,
    placements: Vec<WordPlacement>,
    dropped: Vec<String>,
}

/// Generates a puzzle of `rows` by `cols` with the default settings for everything else.
///
/// This is a shorthand for [`Puzzle::generate`].
pub fn generate<S, R>(words: &[S], rows: usize, cols: usize, rng: &mut R) -> Result<Puzzle, Error>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let config = PuzzleConfig {
        num_rows: rows,
        num_columns: cols,
        ..PuzzleConfig::default()
    };

    Puzzle::generate(words, &config, rng)
}

impl Puzzle {
    /// Generates a puzzle using the thread-local random number generator.
    pub fn new<S: AsRef<str>>(words: &[S], config: &PuzzleConfig) -> Result<Self, Error> {
        Self::generate(words, config, &mut rand::thread_rng())
    }

    /// Generates a new puzzle with the specified configuration, or returns an error if the input is malformed.
    ///
    /// Words are tried in a random order. Each word gets `config.max_attempts` tries at a random start cell and
    /// direction; a try succeeds when every letter lands in the grid on a cell that is empty or already holds the
    /// same letter, so words may cross where they share letters. Words that run out of tries, or are too long for
    /// the grid, are left out of the grid and listed in [`Puzzle::dropped`]. Repeated words are placed once.
    ///
    /// When `config.use_only_given_letters_in_grid` is false, the remaining cells are filled with letters from
    /// 'A' to 'Z'. Otherwise they are filled from the letters contained in the words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordList`] if `words` is empty, and [`Error::InvalidDimensions`] if the grid would
    /// have no rows or no columns.
    pub fn generate<S, R>(words: &[S], config: &PuzzleConfig, rng: &mut R) -> Result<Self, Error>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let (num_rows, num_columns) = (config.num_rows, config.num_columns);

        if num_rows == 0 || num_columns == 0 {
            return Err(Error::InvalidDimensions {
                rows: num_rows,
                cols: num_columns,
            });
        }
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let mut seen = HashSet::new();
        let mut order: Vec<&str> = words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| seen.insert(*word))
            .collect();
        order.shuffle(rng);

        let mut grid = Array2D::filled_with(None, num_rows, num_columns);
        let mut placements = Vec::with_capacity(order.len());
        let mut dropped = Vec::new();

        for word in order {
            match Self::place_word(&mut grid, word, config, rng) {
                Some(placement) => {
                    log::debug!(
                        "placed {} from {:?} to {:?} ({})",
                        placement.word,
                        placement.start,
                        placement.end,
                        placement.direction
                    );
                    placements.push(placement);
                }
                None => {
                    log::warn!(
                        "could not place {word:?} in a {num_rows}x{num_columns} grid, leaving it out"
                    );
                    dropped.push(word.to_owned());
                }
            }
        }

        let letters = Self::filler_letters(words, config.use_only_given_letters_in_grid);
        let grid = Self::fill_grid(&grid, &letters, rng);

        log::info!(
            "generated {num_rows}x{num_columns} puzzle with {} of {} words",
            placements.len(),
            placements.len() + dropped.len()
        );

        Ok(Self {
            grid,
            placements,
            dropped,
        })
    }

    /// Tries random spans for `word` and writes it into the first one that fits.
    fn place_word<R: Rng + ?Sized>(
        grid: &mut Array2D<Option<char>>,
        word: &str,
        config: &PuzzleConfig,
        rng: &mut R,
    ) -> Option<WordPlacement> {
        let (num_rows, num_columns) = (grid.num_rows(), grid.num_columns());
        let len = word.chars().count();

        if len == 0 || len > num_rows.max(num_columns) {
            // No span can hold it, so don't bother trying
            return None;
        }

        for _ in 0..config.max_attempts {
            let direction = if config.allow_backward_words {
                Direction::random(rng)
            } else {
                Direction::random_forward(rng)
            };
            let begin = (rng.gen_range(0..num_rows), rng.gen_range(0..num_columns));
            let span = WordSpan::new(begin, len, direction);

            if fits(grid, word, &span) {
                for (ch, coord) in word.chars().zip(span.indices()) {
                    grid[coord] = Some(ch);
                }

                return WordPlacement::new(word, &span);
            }
        }

        None
    }

    fn filler_letters<S: AsRef<str>>(words: &[S], use_only_given_letters: bool) -> Vec<char> {
        if !use_only_given_letters {
            return ('A'..='Z').collect();
        }

        // Sorted so that a seeded generator always picks the same letters
        let letters: BTreeSet<char> = words
            .iter()
            .flat_map(|word| word.as_ref().chars())
            .collect();

        if letters.is_empty() {
            ('A'..='Z').collect()
        } else {
            letters.into_iter().collect()
        }
    }

    fn fill_grid<R: Rng + ?Sized>(
        grid: &Array2D<Option<char>>,
        letters: &[char],
        rng: &mut R,
    ) -> Array2D<char> {
        let mut cells = grid.elements_row_major_iter();

        Array2D::filled_by_row_major(
            || {
                cells
                    .next()
                    .copied()
                    .flatten()
                    .unwrap_or_else(|| letters[rng.gen_range(0..letters.len())])
            },
            grid.num_rows(),
            grid.num_columns(),
        )
    }

    /// The number of rows in the puzzle grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the puzzle grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner puzzle grid.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the letter at the specified coordinate, returning [`Option::None`] if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The placed words in the order they were placed.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Words from the input that are not hidden in the grid.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Whether every distinct input word made it into the grid.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Whether `word` can be written along `span` without leaving the grid or changing an already placed letter.
pub(crate) fn fits(grid: &Array2D<Option<char>>, word: &str, span: &WordSpan) -> bool {
    if !span.in_bounds(grid.num_rows(), grid.num_columns()) {
        return false;
    }

    word.chars()
        .zip(span.indices())
        .all(|(ch, coord)| grid[coord].map_or(true, |existing| existing == ch))
}

impl Index<(usize, usize)> for Puzzle {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.placements.iter().map(|placement| placement.word.as_str());

        for row in self.grid.rows_iter() {
            for &ch in row {
                write!(f, "{ch} ")?;
            }

            writeln!(f, "| {}", words_iter.next().unwrap_or(""))?;
        }

        // Lists longer than the grid is tall go below it
        for word in words_iter {
            writeln!(f, "{:width$}| {word}", "", width = self.num_columns() * 2)?;
        }

        Ok(())
    }
}
