use crate::grid::{Direction, BLACK_CELL};
use crate::placement::WordPlacement;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Dense grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// A finished crossword: normalized words plus the dense letter grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid_size: GridSize,
    pub words: Vec<WordPlacement>,
    /// Row-major letters, [`BLACK_CELL`] where no word passes
    pub grid: Vec<Vec<char>>,
    #[serde(default)]
    pub across_theme: String,
    #[serde(default)]
    pub down_theme: String,
}

impl Puzzle {
    /// Build a puzzle from placed words.
    ///
    /// Coordinates are normalized first so the grid starts at `(0, 0)`. Clue
    /// numbers are assigned here; clues are left empty.
    pub fn from_words(mut words: Vec<WordPlacement>) -> Self {
        normalize(&mut words);
        let rows = words.iter().map(|w| w.end().0 + 1).max().unwrap_or(0) as usize;
        let cols = words.iter().map(|w| w.end().1 + 1).max().unwrap_or(0) as usize;

        let mut grid = vec![vec![BLACK_CELL; cols]; rows];
        for word in &words {
            for ((r, c), letter) in word.letters() {
                grid[r as usize][c as usize] = letter;
            }
        }

        assign_numbers(&mut words);

        Self {
            grid_size: GridSize { rows, cols },
            words,
            grid,
            across_theme: String::new(),
            down_theme: String::new(),
        }
    }

    /// Letter at `(row, col)`, `None` for black or out-of-range cells
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|&c| c != BLACK_CELL)
    }

    pub fn is_letter_cell(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    /// All letter cells in row-major order
    pub fn letter_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if ch != BLACK_CELL {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Clue number printed in the cell, if a word starts there
    pub fn number_at(&self, row: usize, col: usize) -> Option<u32> {
        self.words
            .iter()
            .find(|w| w.start_row == row as i32 && w.start_col == col as i32)
            .map(|w| w.number)
    }

    /// Words of one direction, ordered by clue number
    pub fn words_in(&self, direction: Direction) -> Vec<&WordPlacement> {
        let mut words: Vec<_> = self.words.iter().filter(|w| w.direction == direction).collect();
        words.sort_by_key(|w| w.number);
        words
    }

    /// Fill in clues from `clues`, keyed by uppercase word.
    ///
    /// Words without an entry get "Related to <theme>" using the theme of
    /// their direction.
    pub fn attach_clues(&mut self, clues: &HashMap<String, String>) {
        for word in &mut self.words {
            word.clue = match clues.get(&word.word.to_uppercase()) {
                Some(clue) if !clue.trim().is_empty() => clue.trim().to_string(),
                _ => {
                    let theme = match word.direction {
                        Direction::Across => &self.across_theme,
                        Direction::Down => &self.down_theme,
                    };
                    generic_clue(theme)
                }
            };
        }
    }
}

/// Shift words so the smallest occupied row and column become 0.
///
/// Returns the `(row, col)` offsets that were subtracted.
pub fn normalize(words: &mut [WordPlacement]) -> (i32, i32) {
    let min_row = words.iter().map(|w| w.start_row).min().unwrap_or(0);
    let min_col = words.iter().map(|w| w.start_col).min().unwrap_or(0);
    for word in words.iter_mut() {
        word.shift(min_row, min_col);
    }
    (min_row, min_col)
}

/// Fallback clue for a word with no clue of its own
pub fn generic_clue(theme: &str) -> String {
    format!("Related to {}", theme)
}

/// Number words by their start cells.
///
/// Distinct start cells are sorted row-major and numbered from 1; an across
/// and a down word starting in the same cell share a number.
pub fn assign_numbers(words: &mut [WordPlacement]) {
    let starts: BTreeSet<(i32, i32)> = words.iter().map(|w| w.start()).collect();
    let numbers: HashMap<(i32, i32), u32> = starts.into_iter().zip(1..).collect();
    for word in words {
        word.number = numbers[&word.start()];
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
