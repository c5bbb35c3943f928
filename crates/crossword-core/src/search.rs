//! Candidate search: every legal start position for a new word.
//!
//! A start position is legal when all of the following hold:
//!
//! 1. every cell the word covers is empty or already holds the same letter
//! 2. exactly one covered cell is shared with the existing grid
//! 3. no covered cell touches a same-direction word running on the same line
//! 4. no same-direction word on a neighbouring line shares more than one
//!    cell of span with the new word
//! 5. the cells directly before the first letter and after the last are empty
//!
//! Rules 3 and 4 look similar but catch different layouts: rule 3 stops two
//! across words from merging into one run, rule 4 stops two parallel words
//! from lying side by side.

use crate::grid::{Coord, Direction, SparseGrid};
use crate::placement::WordPlacement;

/// Why a start position was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A covered cell already holds a different letter
    LetterConflict { cell: Coord },
    /// A covered cell touches a same-direction word on the same line
    CollinearAdjacent { cell: Coord },
    /// A same-direction word on a neighbouring line overlaps by more than one cell
    ParallelOverlap { overlap: i32 },
    /// The word would not touch the existing grid
    NoIntersection,
    /// The word would share more than one cell with the existing grid
    MultipleIntersections { count: usize },
    /// The cell before the start or after the end is occupied
    EndNotIsolated { cell: Coord },
}

/// Searches the current layout for positions where a word may be placed
pub struct CandidateSearch<'a> {
    grid: &'a SparseGrid,
    placed: &'a [WordPlacement],
}

impl<'a> CandidateSearch<'a> {
    pub fn new(grid: &'a SparseGrid, placed: &'a [WordPlacement]) -> Self {
        Self { grid, placed }
    }

    /// All legal start positions for `word`, in row-major scan order.
    ///
    /// The scan covers the occupied bounding box widened by `len + 2` cells on
    /// every side. An empty result means the word cannot be placed right now.
    pub fn positions(&self, word: &str, direction: Direction) -> Vec<Coord> {
        let letters: Vec<char> = word.chars().collect();
        let bounds = self.grid.bounds();
        let buffer = letters.len() as i32 + 2;

        let mut positions = Vec::new();
        for row in (bounds.min_row - buffer)..=(bounds.max_row + buffer) {
            for col in (bounds.min_col - buffer)..=(bounds.max_col + buffer) {
                if self.check_letters(&letters, (row, col), direction).is_ok() {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Check a single start position, reporting the first rule it breaks
    pub fn check(&self, word: &str, start: Coord, direction: Direction) -> Result<(), Rejection> {
        let letters: Vec<char> = word.chars().collect();
        self.check_letters(&letters, start, direction)
    }

    fn check_letters(&self, letters: &[char], start: Coord, direction: Direction) -> Result<(), Rejection> {
        let mut intersections = 0;

        for (i, &letter) in letters.iter().enumerate() {
            let cell = direction.offset(start, i as i32);

            match self.grid.get(cell) {
                Some(existing) if existing != letter => return Err(Rejection::LetterConflict { cell }),
                Some(_) => intersections += 1,
                None => {}
            }

            if self.touches_collinear(cell, direction) {
                return Err(Rejection::CollinearAdjacent { cell });
            }
        }

        if let Some(overlap) = self.parallel_overlap(start, letters.len() as i32, direction) {
            return Err(Rejection::ParallelOverlap { overlap });
        }

        match intersections {
            0 => return Err(Rejection::NoIntersection),
            1 => {}
            count => return Err(Rejection::MultipleIntersections { count }),
        }

        let before = direction.offset(start, -1);
        if self.grid.is_occupied(before) {
            return Err(Rejection::EndNotIsolated { cell: before });
        }
        let after = direction.offset(start, letters.len() as i32);
        if self.grid.is_occupied(after) {
            return Err(Rejection::EndNotIsolated { cell: after });
        }

        Ok(())
    }

    fn same_direction(&self, direction: Direction) -> impl Iterator<Item = &WordPlacement> + '_ {
        self.placed.iter().filter(move |pw| pw.direction == direction)
    }

    /// Whether `cell` lies on, or right next to, a same-direction word on its line
    fn touches_collinear(&self, cell: Coord, direction: Direction) -> bool {
        let line = direction.line_of(cell);
        let pos = direction.along(cell);

        self.same_direction(direction)
            .filter(|pw| pw.line() == line)
            .any(|pw| {
                let (first, last) = pw.span();
                !(pos + 1 < first || pos - 1 > last)
            })
    }

    /// Largest span overlap above one cell with a same-direction word on a neighbouring line
    fn parallel_overlap(&self, start: Coord, len: i32, direction: Direction) -> Option<i32> {
        let line = direction.line_of(start);
        let first = direction.along(start);
        let last = first + len - 1;

        self.same_direction(direction)
            .filter(|pw| (pw.line() - line).abs() == 1)
            .map(|pw| {
                let (pw_first, pw_last) = pw.span();
                (last.min(pw_last) - first.max(pw_first) + 1).max(0)
            })
            .find(|&overlap| overlap > 1)
    }
}

/// Shorthand for [`CandidateSearch::positions`]
pub fn find_positions(grid: &SparseGrid, placed: &[WordPlacement], word: &str, direction: Direction) -> Vec<Coord> {
    CandidateSearch::new(grid, placed).positions(word, direction)
}
