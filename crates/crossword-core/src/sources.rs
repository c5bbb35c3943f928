//! Collaborators the daily generator talks to: where words and clues come
//! from, and where used words and finished puzzles are kept.
//!
//! The binary provides file-backed and built-in implementations;
//! [`MemoryStore`] keeps everything in memory for tests.

use crate::date::PuzzleDate;
use crate::puzzle::Puzzle;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Mixed word list used when a theme cannot be fetched
pub const FALLBACK_WORDS: &[&str] = &[
    "APPLE", "TIGER", "LASER", "ROBOT", "PYTHON", "EARTH", "CLOUD", "ZEBRA", "HONEY", "SOLAR", "RIVER", "PLANE",
    "MANGO", "PIZZA", "QUARK", "NEURON", "MUSIC", "CHAIR", "BRICK", "OCEAN", "SPORT", "CYCLE", "SMILE", "STORM",
    "EAGLE", "BRAIN", "LIGHT", "CODE", "SPACE", "PARTY",
];

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("word source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Supplies candidate words for a theme
pub trait WordSource {
    /// Up to `count` words for `theme`, each at least `min_length` letters
    fn fetch_theme_words(&self, theme: &str, count: usize, min_length: usize) -> Result<Vec<String>, SourceError>;
}

/// Supplies clue text for placed words
pub trait ClueSource {
    /// Clues keyed by uppercase word; words may be missing from the result
    fn fetch_clues(&self, words: &[String], theme: &str) -> Result<HashMap<String, String>, SourceError>;
}

/// Remembers which words were used on which day
pub trait UsageStore {
    /// Words used on a date strictly after `today - days`
    fn recently_used(&self, today: PuzzleDate, days: u32) -> Result<HashSet<String>, StoreError>;

    /// Record `words` as used on `date`, replacing any earlier date
    fn record_used(&self, words: &[String], date: PuzzleDate) -> Result<(), StoreError>;
}

/// Keeps one finished puzzle per day
pub trait PuzzleStore {
    fn load_puzzle(&self, date: PuzzleDate) -> Result<Option<Puzzle>, StoreError>;

    fn save_puzzle(&self, date: PuzzleDate, puzzle: &Puzzle) -> Result<(), StoreError>;
}

/// Both kinds of storage behind one object
pub trait Archive: UsageStore + PuzzleStore {}

impl<T: UsageStore + PuzzleStore + ?Sized> Archive for T {}

/// Random words from [`FALLBACK_WORDS`] not in `exclude`.
///
/// At most half the list is returned so two themes falling back in the same
/// attempt can still be given disjoint words.
pub fn fallback_words<R: Rng + ?Sized>(rng: &mut R, count: usize, exclude: &[String]) -> Vec<String> {
    let available: Vec<&str> = FALLBACK_WORDS
        .iter()
        .copied()
        .filter(|w| !exclude.iter().any(|e| e.eq_ignore_ascii_case(w)))
        .collect();
    let take = count.min(FALLBACK_WORDS.len() / 2);
    available.choose_multiple(rng, take).map(|w| w.to_string()).collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory store
pub struct MemoryStore {
    used: Mutex<HashMap<String, PuzzleDate>>,
    puzzles: Mutex<HashMap<PuzzleDate, Puzzle>>,
    available: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            used: Mutex::new(HashMap::new()),
            puzzles: Mutex::new(HashMap::new()),
            available: Mutex::new(true),
        }
    }

    /// Make every call fail with [`StoreError::Unavailable`]
    pub fn set_available(&self, available: bool) {
        *lock(&self.available) = available;
    }

    /// Date `word` was last recorded on
    pub fn used_on(&self, word: &str) -> Option<PuzzleDate> {
        lock(&self.used).get(word).copied()
    }

    pub fn puzzle_count(&self) -> usize {
        lock(&self.puzzles).len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *lock(&self.available) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store switched off".into()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageStore for MemoryStore {
    fn recently_used(&self, today: PuzzleDate, days: u32) -> Result<HashSet<String>, StoreError> {
        self.check_available()?;
        let cutoff = today.minus_days(days);
        Ok(lock(&self.used)
            .iter()
            .filter(|(_, date)| **date > cutoff)
            .map(|(word, _)| word.clone())
            .collect())
    }

    fn record_used(&self, words: &[String], date: PuzzleDate) -> Result<(), StoreError> {
        self.check_available()?;
        let mut used = lock(&self.used);
        for word in words {
            used.insert(word.to_uppercase(), date);
        }
        Ok(())
    }
}

impl PuzzleStore for MemoryStore {
    fn load_puzzle(&self, date: PuzzleDate) -> Result<Option<Puzzle>, StoreError> {
        self.check_available()?;
        Ok(lock(&self.puzzles).get(&date).cloned())
    }

    fn save_puzzle(&self, date: PuzzleDate, puzzle: &Puzzle) -> Result<(), StoreError> {
        self.check_available()?;
        lock(&self.puzzles).insert(date, puzzle.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use crate::placement::WordPlacement;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> PuzzleDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_recent_window_is_exclusive() {
        let store = MemoryStore::new();
        store.record_used(&["OLD".to_string()], date("2024-05-01")).unwrap();
        store.record_used(&["EDGE".to_string()], date("2024-05-02")).unwrap();
        store.record_used(&["NEW".to_string()], date("2024-05-10")).unwrap();

        let recent = store.recently_used(date("2024-05-15"), 14).unwrap();
        // cutoff is 2024-05-01, which is itself excluded
        assert!(!recent.contains("OLD"));
        assert!(recent.contains("EDGE"));
        assert!(recent.contains("NEW"));
    }

    #[test]
    fn test_record_used_replaces_date() {
        let store = MemoryStore::new();
        store.record_used(&["tiger".to_string()], date("2024-01-01")).unwrap();
        store.record_used(&["TIGER".to_string()], date("2024-03-01")).unwrap();
        assert_eq!(store.used_on("TIGER"), Some(date("2024-03-01")));
    }

    #[test]
    fn test_puzzles_keyed_by_date() {
        let store = MemoryStore::new();
        let puzzle = Puzzle::from_words(vec![WordPlacement::new("OWL", 0, 0, Direction::Across)]);
        store.save_puzzle(date("2024-05-01"), &puzzle).unwrap();

        assert_eq!(store.load_puzzle(date("2024-05-01")).unwrap(), Some(puzzle));
        assert_eq!(store.load_puzzle(date("2024-05-02")).unwrap(), None);
        assert_eq!(store.puzzle_count(), 1);
    }

    #[test]
    fn test_unavailable_store_errors() {
        let store = MemoryStore::new();
        store.set_available(false);
        assert!(matches!(
            store.recently_used(date("2024-05-01"), 14),
            Err(StoreError::Unavailable(_))
        ));
        store.set_available(true);
        assert!(store.recently_used(date("2024-05-01"), 14).is_ok());
    }

    #[test]
    fn test_fallback_words() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = fallback_words(&mut rng, 50, &[]);
        assert_eq!(first.len(), FALLBACK_WORDS.len() / 2);

        let second = fallback_words(&mut rng, 50, &first);
        assert_eq!(second.len(), FALLBACK_WORDS.len() / 2);
        assert!(second.iter().all(|w| !first.contains(w)));

        assert_eq!(fallback_words(&mut rng, 3, &[]).len(), 3);
    }
}
