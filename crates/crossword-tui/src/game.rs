use crossword_core::{Direction, Puzzle, WordPlacement};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of checking the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Solved,
    NotYet,
}

impl CheckResult {
    pub fn message(self) -> &'static str {
        match self {
            CheckResult::Solved => "Puzzle solved!",
            CheckResult::NotYet => "Not correct yet.",
        }
    }
}

/// A solving session over one puzzle
pub struct Game {
    puzzle: Puzzle,
    /// Letters typed by the player, keyed by `(row, col)`
    entries: HashMap<(usize, usize), char>,
    hints_used: usize,
    checks: usize,
    solved: bool,
    start_time: Instant,
    elapsed: Duration,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            entries: HashMap::new(),
            hints_used: 0,
            checks: 0,
            solved: false,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Letter typed at `(row, col)`
    pub fn entry(&self, row: usize, col: usize) -> Option<char> {
        self.entries.get(&(row, col)).copied()
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn elapsed(&self) -> Duration {
        if self.solved {
            self.elapsed
        } else {
            self.start_time.elapsed()
        }
    }

    /// Format the elapsed time as MM:SS
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Type a letter. Returns false for black cells, non-letters, or once solved.
    pub fn set_entry(&mut self, row: usize, col: usize, letter: char) -> bool {
        if self.solved || !self.puzzle.is_letter_cell(row, col) || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.entries.insert((row, col), letter.to_ascii_uppercase());
        true
    }

    /// Erase a typed letter. Returns false if the cell was already blank.
    pub fn clear_entry(&mut self, row: usize, col: usize) -> bool {
        if self.solved {
            return false;
        }
        self.entries.remove(&(row, col)).is_some()
    }

    /// Letter cells with nothing typed in them
    pub fn blank_cells(&self) -> Vec<(usize, usize)> {
        self.puzzle
            .letter_cells()
            .into_iter()
            .filter(|cell| !self.entries.contains_key(cell))
            .collect()
    }

    /// Fill a random blank cell with its answer
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.solved {
            return None;
        }
        let &(row, col) = self.blank_cells().choose(rng)?;
        let answer = self.puzzle.cell(row, col)?;
        self.entries.insert((row, col), answer);
        self.hints_used += 1;
        Some((row, col))
    }

    /// Compare every letter cell with the answer
    pub fn check(&mut self) -> CheckResult {
        self.checks += 1;
        if self.solved {
            return CheckResult::Solved;
        }

        let correct = self
            .puzzle
            .letter_cells()
            .into_iter()
            .all(|(row, col)| self.entry(row, col) == self.puzzle.cell(row, col));

        if correct {
            self.solved = true;
            self.elapsed = self.start_time.elapsed();
            CheckResult::Solved
        } else {
            CheckResult::NotYet
        }
    }

    /// Filled cells whose letter differs from the answer
    pub fn wrong_cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = self
            .entries
            .iter()
            .filter(|&(&(row, col), &letter)| self.puzzle.cell(row, col) != Some(letter))
            .map(|(&cell, _)| cell)
            .collect();
        cells.sort();
        cells
    }

    /// The word through `(row, col)` in `direction`, if any
    pub fn word_at(&self, row: usize, col: usize, direction: Direction) -> Option<&WordPlacement> {
        let cell = (row as i32, col as i32);
        self.puzzle
            .words
            .iter()
            .find(|w| w.direction == direction && w.cells().any(|c| c == cell))
    }
}
