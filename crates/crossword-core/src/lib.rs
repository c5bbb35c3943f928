//! Themed crossword generation engine.
//!
//! Words are placed one at a time on a sparse grid, each new word crossing
//! exactly one existing letter. Finished layouts are normalized, numbered,
//! checked for connectivity and handed out one per calendar day.

pub mod assembler;
pub mod config;
pub mod daily;
pub mod date;
pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod search;
pub mod sources;
pub mod validator;

pub use assembler::{AlternationPolicy, Assembler, CandidatePools, Layout};
pub use config::{GeneratorConfig, DEFAULT_THEMES};
pub use daily::{AttemptFailure, DailyGenerator};
pub use date::{DateError, PuzzleDate};
pub use grid::{Bounds, Coord, Direction, SparseGrid, BLACK_CELL};
pub use placement::WordPlacement;
pub use puzzle::{GridSize, Puzzle};
pub use search::{find_positions, CandidateSearch, Rejection};
pub use sources::{
    Archive, ClueSource, MemoryStore, PuzzleStore, SourceError, StoreError, UsageStore, WordSource, FALLBACK_WORDS,
};
pub use validator::{check_words, is_connected, validate_puzzle, ValidationError};
