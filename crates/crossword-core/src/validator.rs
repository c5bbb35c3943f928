//! Structural checks run on a finished word list before a puzzle is accepted.

use crate::grid::{Coord, Direction, BLACK_CELL};
use crate::placement::WordPlacement;
use crate::puzzle::{GridSize, Puzzle};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use std::collections::HashMap;
use thiserror::Error;

/// Reasons a puzzle is rejected. Rejected puzzles are discarded, never repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("puzzle has no words")]
    Empty,
    #[error("words {first} and {second} share {cells} cells")]
    OverOverlap { first: usize, second: usize, cells: usize },
    #[error("words {first} and {second} run the same direction and cross")]
    SameDirectionCrossing { first: usize, second: usize },
    #[error("words {first} and {second} disagree on the letter at ({row}, {col})")]
    LetterMismatch {
        first: usize,
        second: usize,
        row: i32,
        col: i32,
    },
    #[error("only {reached} of {total} words are connected")]
    Disconnected { reached: usize, total: usize },
    #[error("grid is {actual_rows}x{actual_cols} but declares {rows}x{cols}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
    #[error("word {index} is not a numbered uppercase A-Z word")]
    MalformedWord { index: usize },
    #[error("word {index} does not fit inside the grid")]
    OutOfBounds { index: usize },
    #[error("grid disagrees with the words at ({row}, {col})")]
    GridMismatch { row: usize, col: usize },
}

/// Check that every pair of words meets in at most one cell, only across
/// against down, and that the crossing graph is connected.
pub fn check_words(words: &[WordPlacement]) -> Result<(), ValidationError> {
    if words.is_empty() {
        return Err(ValidationError::Empty);
    }

    let letters: Vec<HashMap<Coord, char>> = words.iter().map(|w| w.letters().collect()).collect();

    let mut graph: UnGraphMap<usize, ()> = UnGraphMap::with_capacity(words.len(), words.len());
    for index in 0..words.len() {
        graph.add_node(index);
    }

    for i in 0..words.len() {
        for j in (i + 1)..words.len() {
            let shared: Vec<Coord> = letters[i].keys().filter(|cell| letters[j].contains_key(cell)).copied().collect();

            match shared.as_slice() {
                [] => {}
                &[cell] => {
                    if words[i].direction == words[j].direction {
                        return Err(ValidationError::SameDirectionCrossing { first: i, second: j });
                    }
                    if letters[i][&cell] != letters[j][&cell] {
                        return Err(ValidationError::LetterMismatch {
                            first: i,
                            second: j,
                            row: cell.0,
                            col: cell.1,
                        });
                    }
                    graph.add_edge(i, j, ());
                }
                cells => {
                    return Err(ValidationError::OverOverlap {
                        first: i,
                        second: j,
                        cells: cells.len(),
                    })
                }
            }
        }
    }

    let mut bfs = Bfs::new(&graph, 0);
    let mut reached = 0;
    while bfs.next(&graph).is_some() {
        reached += 1;
    }

    if reached == words.len() {
        Ok(())
    } else {
        Err(ValidationError::Disconnected {
            reached,
            total: words.len(),
        })
    }
}

/// Whether the words form one connected, legal crossword
pub fn is_connected(words: &[WordPlacement]) -> bool {
    check_words(words).is_ok()
}

/// Full check of a finished puzzle: well-formed words inside the grid, word
/// structure, and a dense grid that holds exactly the words' letters
pub fn validate_puzzle(puzzle: &Puzzle) -> Result<(), ValidationError> {
    let actual_rows = puzzle.grid.len();
    let actual_cols = puzzle.grid.first().map_or(0, Vec::len);
    let declared = puzzle.grid_size;
    if actual_rows != declared.rows
        || actual_cols != declared.cols
        || puzzle.grid.iter().any(|row| row.len() != declared.cols)
    {
        return Err(ValidationError::SizeMismatch {
            rows: declared.rows,
            cols: declared.cols,
            actual_rows,
            actual_cols,
        });
    }

    for (index, word) in puzzle.words.iter().enumerate() {
        if !is_well_formed(word) {
            return Err(ValidationError::MalformedWord { index });
        }
        if !fits(word, declared) {
            return Err(ValidationError::OutOfBounds { index });
        }
    }

    check_words(&puzzle.words)?;

    let mut expected = vec![vec![BLACK_CELL; declared.cols]; declared.rows];
    for word in &puzzle.words {
        for ((row, col), letter) in word.letters() {
            if let Some(cell) = expected.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
                *cell = letter;
            }
        }
    }

    for (row, (wanted, held)) in expected.iter().zip(&puzzle.grid).enumerate() {
        if let Some(col) = wanted.iter().zip(held).position(|(a, b)| a != b) {
            return Err(ValidationError::GridMismatch { row, col });
        }
    }

    Ok(())
}

fn is_well_formed(word: &WordPlacement) -> bool {
    !word.word.is_empty() && word.word.chars().all(|c| c.is_ascii_uppercase()) && word.number > 0
}

/// Whether every cell of `word` lies inside a grid of `size`
fn fits(word: &WordPlacement, size: GridSize) -> bool {
    let (Ok(row), Ok(col)) = (usize::try_from(word.start_row), usize::try_from(word.start_col)) else {
        return false;
    };
    let (line, line_count, start, extent) = match word.direction {
        Direction::Across => (row, size.rows, col, size.cols),
        Direction::Down => (col, size.cols, row, size.rows),
    };
    line < line_count && start.checked_add(word.len()).is_some_and(|end| end <= extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[(&str, i32, i32, Direction)]) -> Vec<WordPlacement> {
        list.iter()
            .map(|&(word, row, col, direction)| WordPlacement::new(word, row, col, direction))
            .collect()
    }

    #[test]
    fn test_connected_crossing() {
        let list = words(&[
            ("PYTHON", 0, 0, Direction::Across),
            ("TIGER", 0, 2, Direction::Down),
            ("RIVER", 4, 2, Direction::Across),
        ]);
        assert_eq!(check_words(&list), Ok(()));
        assert!(is_connected(&list));
    }

    #[test]
    fn test_disconnected_rejected() {
        let list = words(&[
            ("PYTHON", 0, 0, Direction::Across),
            ("TIGER", 0, 2, Direction::Down),
            ("MANGO", 10, 10, Direction::Across),
        ]);
        assert_eq!(
            check_words(&list),
            Err(ValidationError::Disconnected { reached: 2, total: 3 })
        );
    }

    #[test]
    fn test_same_direction_crossing_rejected() {
        let list = words(&[
            ("CLOUD", 0, 0, Direction::Across),
            ("DOG", 0, 4, Direction::Across),
        ]);
        assert_eq!(
            check_words(&list),
            Err(ValidationError::SameDirectionCrossing { first: 0, second: 1 })
        );
    }

    #[test]
    fn test_multi_cell_overlap_rejected() {
        let list = words(&[
            ("SOLAR", 0, 0, Direction::Across),
            ("SOLARIS", 0, 0, Direction::Across),
        ]);
        assert_eq!(
            check_words(&list),
            Err(ValidationError::OverOverlap {
                first: 0,
                second: 1,
                cells: 5
            })
        );
    }

    #[test]
    fn test_letter_mismatch_rejected() {
        let list = words(&[
            ("CAT", 0, 0, Direction::Across),
            ("DOG", 0, 1, Direction::Down),
        ]);
        assert_eq!(
            check_words(&list),
            Err(ValidationError::LetterMismatch {
                first: 0,
                second: 1,
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(check_words(&[]), Err(ValidationError::Empty));
    }

    #[test]
    fn test_single_word_is_connected() {
        assert!(is_connected(&words(&[("ROBOT", 0, 0, Direction::Across)])));
    }

    #[test]
    fn test_validate_puzzle_checks_grid() {
        let mut puzzle = Puzzle::from_words(words(&[
            ("PYTHON", 0, 0, Direction::Across),
            ("TIGER", 0, 2, Direction::Down),
        ]));
        assert_eq!(validate_puzzle(&puzzle), Ok(()));

        puzzle.grid[2][2] = 'X';
        assert_eq!(validate_puzzle(&puzzle), Err(ValidationError::GridMismatch { row: 2, col: 2 }));

        puzzle.grid.pop();
        assert!(matches!(validate_puzzle(&puzzle), Err(ValidationError::SizeMismatch { .. })));
    }

    fn python_tiger() -> Puzzle {
        // P Y T H O N
        // . . I . . .
        // . . G . . .
        // . . E . . .
        // . . R . . .
        Puzzle::from_words(words(&[
            ("PYTHON", 0, 0, Direction::Across),
            ("TIGER", 0, 2, Direction::Down),
        ]))
    }

    #[test]
    fn test_stray_grid_letter_rejected() {
        let mut puzzle = python_tiger();
        puzzle.grid[4][5] = 'Z';
        assert_eq!(validate_puzzle(&puzzle), Err(ValidationError::GridMismatch { row: 4, col: 5 }));
    }

    #[test]
    fn test_malformed_words_rejected() {
        let mut lowercase = python_tiger();
        lowercase.words[1].word = "tiger".to_string();
        assert_eq!(validate_puzzle(&lowercase), Err(ValidationError::MalformedWord { index: 1 }));

        let mut digits = python_tiger();
        digits.words[0].word = "PYT4ON".to_string();
        assert_eq!(validate_puzzle(&digits), Err(ValidationError::MalformedWord { index: 0 }));

        let mut empty = python_tiger();
        empty.words[1].word.clear();
        assert_eq!(validate_puzzle(&empty), Err(ValidationError::MalformedWord { index: 1 }));

        let mut unnumbered = python_tiger();
        unnumbered.words[0].number = 0;
        assert_eq!(validate_puzzle(&unnumbered), Err(ValidationError::MalformedWord { index: 0 }));
    }

    #[test]
    fn test_words_outside_grid_rejected() {
        let mut far = python_tiger();
        far.words[1].start_row = i32::MAX;
        assert_eq!(validate_puzzle(&far), Err(ValidationError::OutOfBounds { index: 1 }));

        let mut negative = python_tiger();
        negative.words[0].start_col = -1;
        assert_eq!(validate_puzzle(&negative), Err(ValidationError::OutOfBounds { index: 0 }));

        let mut overrun = python_tiger();
        overrun.words[0].word = "PYTHONS".to_string();
        assert_eq!(validate_puzzle(&overrun), Err(ValidationError::OutOfBounds { index: 0 }));

        let mut wrong_line = python_tiger();
        wrong_line.words[1].start_col = 6;
        assert_eq!(validate_puzzle(&wrong_line), Err(ValidationError::OutOfBounds { index: 1 }));
    }
}
