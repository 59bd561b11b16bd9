use std::collections::HashSet;

use rand::Rng;

use crate::{Direction, Error, Puzzle, PuzzleConfig};

/// The cells picked during one drag gesture, in the order they were entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<(usize, usize)>,
    selecting: bool,
}

impl Selection {
    /// Starts a new gesture at `cell`, discarding any previous path.
    pub fn begin(&mut self, cell: (usize, usize)) {
        self.cells.clear();
        self.cells.push(cell);
        self.selecting = true;
    }

    /// Appends `cell` to the path if a gesture is in progress and the cell isn't the last one already.
    pub fn extend(&mut self, cell: (usize, usize)) {
        if self.selecting && self.cells.last() != Some(&cell) {
            self.cells.push(cell);
        }
    }

    /// Ends the gesture and hands back its path.
    pub fn finish(&mut self) -> Vec<(usize, usize)> {
        self.selecting = false;
        std::mem::take(&mut self.cells)
    }

    /// Whether a gesture is in progress.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The path so far.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// The direction of the path if it has at least two cells and runs in a straight, unbroken line.
    pub fn direction(&self) -> Option<Direction> {
        let step = |(a, b): (&(usize, usize), &(usize, usize))| {
            let dr = b.0 as isize - a.0 as isize;
            let dc = b.1 as isize - a.1 as isize;
            Direction::from_delta(dr, dc)
        };

        let mut steps = self.cells.iter().zip(self.cells.iter().skip(1)).map(step);
        let first = steps.next()??;

        steps.all(|direction| direction == Some(first)).then_some(first)
    }
}

/// A play session over one puzzle: the player's current selection and the words found so far.
///
/// Calling [`Session::reset`] swaps in a freshly generated puzzle for the same words and starts over.
#[derive(Clone, Debug)]
pub struct Session {
    words: Vec<String>,
    config: PuzzleConfig,
    puzzle: Puzzle,
    selection: Selection,
    found: HashSet<String>,
}

impl Session {
    /// Generates a puzzle for `words` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Fails for the same malformed input as [`Puzzle::generate`].
    pub fn new<S, R>(words: &[S], config: PuzzleConfig, rng: &mut R) -> Result<Self, Error>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let puzzle = Puzzle::generate(words, &config, rng)?;

        Ok(Self::with_puzzle(
            words.iter().map(|word| word.as_ref().to_owned()).collect(),
            config,
            puzzle,
        ))
    }

    fn with_puzzle(words: Vec<String>, config: PuzzleConfig, puzzle: Puzzle) -> Self {
        Self {
            words,
            config,
            puzzle,
            selection: Selection::default(),
            found: HashSet::new(),
        }
    }

    /// Throws away the current puzzle and progress and generates a new puzzle for the same words.
    ///
    /// # Errors
    ///
    /// Fails for the same malformed input as [`Puzzle::generate`], leaving the session untouched.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        self.puzzle = Puzzle::generate(&self.words, &self.config, rng)?;
        self.selection = Selection::default();
        self.found.clear();

        Ok(())
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The words the session was started with.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Starts a selection at `cell`. Out of bounds cells are ignored.
    pub fn begin_selection(&mut self, cell: (usize, usize)) {
        if self.in_bounds(cell) {
            self.selection.begin(cell);
        }
    }

    /// Adds `cell` to the selection in progress. Does nothing if no selection was started.
    pub fn extend_selection(&mut self, cell: (usize, usize)) {
        if self.in_bounds(cell) {
            self.selection.extend(cell);
        }
    }

    /// Ends the selection in progress and checks it against the hidden words.
    ///
    /// The selected letters match a word when they spell it forwards or backwards. Returns the newly found word,
    /// or [`Option::None`] when nothing new matched. The selection is cleared either way.
    pub fn end_selection(&mut self) -> Option<String> {
        let cells = self.selection.finish();

        if cells.len() < 2 {
            return None;
        }

        let spelled: String = cells
            .iter()
            .filter_map(|&(row, column)| self.puzzle.get(row, column))
            .collect();
        let reversed: String = spelled.chars().rev().collect();

        let matched = self
            .puzzle
            .placements()
            .iter()
            .map(|placement| &placement.word)
            .find(|word| !self.found.contains(*word) && (**word == spelled || **word == reversed))
            .cloned();

        match &matched {
            Some(word) => {
                log::trace!("found {word}");
                self.found.insert(word.clone());
            }
            None => log::trace!("selection {spelled:?} matches no remaining word"),
        }

        matched
    }

    /// Whether a selection is in progress.
    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    /// The cells of the selection in progress, in the order they were picked.
    pub fn selected_cells(&self) -> &[(usize, usize)] {
        self.selection.cells()
    }

    /// The direction of the selection in progress, when it is a straight line.
    pub fn selected_direction(&self) -> Option<Direction> {
        self.selection.direction()
    }

    /// Whether `cell` is part of the selection in progress.
    pub fn is_selected(&self, cell: (usize, usize)) -> bool {
        self.selection.cells().contains(&cell)
    }

    /// The words found so far.
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found
    }

    /// Whether `word` has been found.
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// How many words have been found.
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// How many words are hidden in the puzzle. Dropped words don't count.
    pub fn total_words(&self) -> usize {
        self.puzzle.placements().len()
    }

    /// Whether every hidden word has been found.
    pub fn is_complete(&self) -> bool {
        self.total_words() > 0 && self.found_count() == self.total_words()
    }

    /// Every cell covered by a found word.
    pub fn found_cells(&self) -> HashSet<(usize, usize)> {
        self.puzzle
            .placements()
            .iter()
            .filter(|placement| self.found.contains(&placement.word))
            .flat_map(|placement| placement.cells())
            .collect()
    }

    fn in_bounds(&self, (row, column): (usize, usize)) -> bool {
        row < self.puzzle.num_rows() && column < self.puzzle.num_columns()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Selection, Session};
    use crate::{Direction, PuzzleConfig, WordPlacement};

    fn session(words: &[&str]) -> Session {
        let config = PuzzleConfig {
            num_rows: 8,
            num_columns: 8,
            ..PuzzleConfig::default()
        };
        Session::new(words, config, &mut StdRng::seed_from_u64(3)).unwrap()
    }

    fn select(session: &mut Session, cells: &[(usize, usize)]) -> Option<String> {
        session.begin_selection(cells[0]);
        for &cell in &cells[1..] {
            session.extend_selection(cell);
        }
        session.end_selection()
    }

    fn placement<'a>(session: &'a Session, word: &str) -> &'a WordPlacement {
        session
            .puzzle()
            .placements()
            .iter()
            .find(|placement| placement.word == word)
            .unwrap()
    }

    #[test]
    fn selection_gesture() {
        let mut selection = Selection::default();

        selection.extend((0, 0));
        assert!(selection.cells().is_empty());

        selection.begin((1, 1));
        selection.extend((1, 2));
        selection.extend((1, 2));
        selection.extend((1, 3));
        assert!(selection.is_selecting());
        assert_eq!(selection.cells(), [(1, 1), (1, 2), (1, 3)]);

        assert_eq!(selection.finish(), vec![(1, 1), (1, 2), (1, 3)]);
        assert!(!selection.is_selecting());
        assert!(selection.cells().is_empty());
    }

    #[test]
    fn selection_direction() {
        let mut selection = Selection::default();

        selection.begin((3, 3));
        assert_eq!(selection.direction(), None);

        selection.extend((2, 4));
        selection.extend((1, 5));
        assert_eq!(selection.direction(), Some(Direction::DiagonalUp));

        selection.extend((1, 6));
        assert_eq!(selection.direction(), None);

        selection.begin((0, 0));
        selection.extend((0, 2));
        assert_eq!(selection.direction(), None);
    }

    #[test]
    fn selected_direction_matches_placement() {
        let mut session = session(&["CAT"]);
        let cat = placement(&session, "CAT").clone();

        session.begin_selection(cat.start);
        for &cell in &cat.cells()[1..] {
            session.extend_selection(cell);
        }

        assert_eq!(session.selected_direction(), Some(cat.direction));
    }

    #[test]
    fn find_word_forwards_and_backwards() {
        let mut session = session(&["CAT", "DOG"]);
        let cat = placement(&session, "CAT").cells();

        assert_eq!(select(&mut session, &cat).as_deref(), Some("CAT"));
        assert!(session.is_found("CAT"));
        assert_eq!(session.found_count(), 1);

        // Finding it again, even spelled backwards, changes nothing
        let backwards: Vec<_> = cat.iter().rev().copied().collect();
        assert_eq!(select(&mut session, &backwards), None);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn backwards_selection_finds_word() {
        let mut session = session(&["CAT"]);
        let backwards: Vec<_> = placement(&session, "CAT").cells().into_iter().rev().collect();

        assert_eq!(select(&mut session, &backwards).as_deref(), Some("CAT"));
        assert!(session.is_complete());
        assert_eq!(session.found_cells().len(), 3);
    }

    #[test]
    fn single_cell_selection_never_matches() {
        let mut session = session(&["CAT"]);
        let start = placement(&session, "CAT").start;

        assert_eq!(select(&mut session, &[start]), None);
        assert!(!session.is_selecting());
        assert!(session.selected_cells().is_empty());
    }

    #[test]
    fn selection_is_cleared_after_a_miss() {
        let mut session = session(&["CAT"]);

        session.begin_selection((0, 0));
        session.extend_selection((0, 1));
        session.extend_selection((50, 50));
        assert!(session.is_selected((0, 1)));
        assert!(!session.is_selected((50, 50)));

        session.end_selection();
        assert!(!session.is_selecting());
        assert!(session.selected_cells().is_empty());
    }

    #[test]
    fn complete_and_reset() {
        let mut session = session(&["CAT", "DOG", "BIRD"]);
        let paths: Vec<_> = session
            .puzzle()
            .placements()
            .iter()
            .map(WordPlacement::cells)
            .collect();

        for path in &paths {
            assert!(select(&mut session, path).is_some());
        }
        assert_eq!(session.found_count(), session.total_words());
        assert!(session.is_complete());

        session.reset(&mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(session.found_count(), 0);
        assert!(!session.is_complete());
        assert!(session.found_cells().is_empty());
        assert_eq!(session.words(), ["CAT", "DOG", "BIRD"]);
    }
}
