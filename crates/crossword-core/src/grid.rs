use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Character used for black (unused) cells in the dense grid
pub const BLACK_CELL: char = '.';

/// A `(row, col)` coordinate on the unbounded placement grid
pub type Coord = (i32, i32);

/// Placement direction of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Letters advance along columns
    Across,
    /// Letters advance along rows
    Down,
}

impl Direction {
    /// `(row, col)` step between consecutive letters
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// The perpendicular direction
    pub fn other(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// The line a cell sits on: its row for across words, its column for down words
    pub fn line_of(self, cell: Coord) -> i32 {
        match self {
            Direction::Across => cell.0,
            Direction::Down => cell.1,
        }
    }

    /// Position of a cell along this direction
    pub fn along(self, cell: Coord) -> i32 {
        match self {
            Direction::Across => cell.1,
            Direction::Down => cell.0,
        }
    }

    /// The cell `offset` steps from `start`
    pub fn offset(self, start: Coord, offset: i32) -> Coord {
        let (dr, dc) = self.step();
        (start.0 + dr * offset, start.1 + dc * offset)
    }

    pub fn all() -> &'static [Direction] {
        &[Direction::Across, Direction::Down]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// Inclusive bounding box over occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Bounds {
    pub fn rows(&self) -> usize {
        (self.max_row - self.min_row + 1) as usize
    }

    pub fn cols(&self) -> usize {
        (self.max_col - self.min_col + 1) as usize
    }
}

/// Sparse coordinate to letter map used while words are being placed.
///
/// The grid has no fixed extent; coordinates may go negative until the
/// finished layout is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<Coord, char>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter at `cell`, if occupied
    pub fn get(&self, cell: Coord) -> Option<char> {
        self.cells.get(&cell).copied()
    }

    pub fn is_occupied(&self, cell: Coord) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Write `word` starting at `(row, col)`.
    ///
    /// Existing letters are overwritten without any checks; callers validate
    /// the position first with [`CandidateSearch`](crate::search::CandidateSearch).
    pub fn place(&mut self, word: &str, row: i32, col: i32, direction: Direction) {
        for (i, letter) in word.chars().enumerate() {
            self.cells.insert(direction.offset((row, col), i as i32), letter);
        }
    }

    /// Bounding box of the occupied cells; `(0, 0, 0, 0)` when empty
    pub fn bounds(&self) -> Bounds {
        let mut cells = self.cells.keys();
        let Some(&(row, col)) = cells.next() else {
            return Bounds::default();
        };

        cells.fold(
            Bounds {
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            },
            |b, &(r, c)| Bounds {
                min_row: b.min_row.min(r),
                max_row: b.max_row.max(r),
                min_col: b.min_col.min(c),
                max_col: b.max_col.max(c),
            },
        )
    }

    /// Copy of this grid with every cell moved by `(-row_offset, -col_offset)`
    pub fn shifted(&self, row_offset: i32, col_offset: i32) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .map(|(&(r, c), &letter)| ((r - row_offset, c - col_offset), letter))
                .collect(),
        }
    }

    /// Dense row-major matrix covering the bounding box, black cells filled with [`BLACK_CELL`]
    pub fn to_dense(&self) -> Vec<Vec<char>> {
        if self.is_empty() {
            return Vec::new();
        }

        let bounds = self.bounds();
        let mut dense = vec![vec![BLACK_CELL; bounds.cols()]; bounds.rows()];
        for (&(r, c), &letter) in &self.cells {
            dense[(r - bounds.min_row) as usize][(c - bounds.min_col) as usize] = letter;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_across_and_down() {
        let mut grid = SparseGrid::new();
        grid.place("CAT", 0, 0, Direction::Across);
        grid.place("ARM", 0, 1, Direction::Down);

        assert_eq!(grid.get((0, 0)), Some('C'));
        assert_eq!(grid.get((0, 1)), Some('A'));
        assert_eq!(grid.get((0, 2)), Some('T'));
        assert_eq!(grid.get((1, 1)), Some('R'));
        assert_eq!(grid.get((2, 1)), Some('M'));
        assert_eq!(grid.get((1, 0)), None);
        // shared cell counted once
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn test_bounds_empty_grid() {
        assert_eq!(SparseGrid::new().bounds(), Bounds::default());
    }

    #[test]
    fn test_bounds_with_negative_coords() {
        let mut grid = SparseGrid::new();
        grid.place("DOG", -2, 1, Direction::Down);
        grid.place("GO", 0, 1, Direction::Across);

        let bounds = grid.bounds();
        assert_eq!(bounds.min_row, -2);
        assert_eq!(bounds.max_row, 0);
        assert_eq!(bounds.min_col, 1);
        assert_eq!(bounds.max_col, 2);
        assert_eq!(bounds.rows(), 3);
        assert_eq!(bounds.cols(), 2);
    }

    #[test]
    fn test_to_dense_fills_black_cells() {
        let mut grid = SparseGrid::new();
        grid.place("CAT", 0, 0, Direction::Across);
        grid.place("TOE", 0, 2, Direction::Down);

        let dense = grid.to_dense();
        assert_eq!(dense.len(), 3);
        assert_eq!(dense[0], vec!['C', 'A', 'T']);
        assert_eq!(dense[1], vec!['.', '.', 'O']);
        assert_eq!(dense[2], vec!['.', '.', 'E']);
    }

    #[test]
    fn test_direction_axes() {
        assert_eq!(Direction::Across.line_of((3, 7)), 3);
        assert_eq!(Direction::Across.along((3, 7)), 7);
        assert_eq!(Direction::Down.line_of((3, 7)), 7);
        assert_eq!(Direction::Down.along((3, 7)), 3);
        assert_eq!(Direction::Down.offset((1, 1), 2), (3, 1));
        assert_eq!(Direction::Across.other(), Direction::Down);
    }
}
