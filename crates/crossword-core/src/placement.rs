use crate::grid::{Coord, Direction};
use serde::{Deserialize, Serialize};

/// A word placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    /// Uppercase alphabetic word
    pub word: String,
    pub start_row: i32,
    pub start_col: i32,
    pub direction: Direction,
    /// Clue text, empty until clues are attached
    #[serde(default)]
    pub clue: String,
    /// Clue number, 0 until numbers are assigned
    #[serde(default)]
    pub number: u32,
}

impl WordPlacement {
    pub fn new(word: impl Into<String>, start_row: i32, start_col: i32, direction: Direction) -> Self {
        Self {
            word: word.into(),
            start_row,
            start_col,
            direction,
            clue: String::new(),
            number: 0,
        }
    }

    pub fn start(&self) -> Coord {
        (self.start_row, self.start_col)
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Last occupied cell
    pub fn end(&self) -> Coord {
        self.direction.offset(self.start(), self.len() as i32 - 1)
    }

    /// The row (across) or column (down) this word runs along
    pub fn line(&self) -> i32 {
        self.direction.line_of(self.start())
    }

    /// Inclusive `(first, last)` positions along the word's direction
    pub fn span(&self) -> (i32, i32) {
        (self.direction.along(self.start()), self.direction.along(self.end()))
    }

    /// Occupied cells in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len() as i32).map(move |i| self.direction.offset(self.start(), i))
    }

    /// Occupied cells paired with their letters
    pub fn letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells().zip(self.word.chars())
    }

    /// Move the start by `(-row_offset, -col_offset)`
    pub fn shift(&mut self, row_offset: i32, col_offset: i32) {
        self.start_row -= row_offset;
        self.start_col -= col_offset;
    }
}
