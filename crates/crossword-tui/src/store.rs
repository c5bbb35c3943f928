//! JSON file holding used words and past puzzles

use crossword_core::{Puzzle, PuzzleDate, PuzzleStore, StoreError, UsageStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

const FILE_NAME: &str = "daily_crossword.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    /// Last date each word appeared in a puzzle
    #[serde(default)]
    used_words: BTreeMap<String, PuzzleDate>,
    #[serde(default)]
    puzzles: BTreeMap<PuzzleDate, Puzzle>,
}

/// File-backed store under the platform data directory
pub struct JsonStore {
    path: PathBuf,
    cache: Mutex<Option<StoreData>>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreData, StoreError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref data) = *cache {
            return Ok(data.clone());
        }

        let data = match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).map_err(|e| StoreError::Corrupt(e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreData::default(),
            Err(e) => return Err(e.into()),
        };

        *cache = Some(data.clone());
        Ok(data)
    }

    fn save(&self, data: StoreData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&data).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;

        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(data);
        Ok(())
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageStore for JsonStore {
    fn recently_used(&self, today: PuzzleDate, days: u32) -> Result<HashSet<String>, StoreError> {
        let cutoff = today.minus_days(days);
        Ok(self
            .load()?
            .used_words
            .into_iter()
            .filter(|(_, date)| *date > cutoff)
            .map(|(word, _)| word)
            .collect())
    }

    fn record_used(&self, words: &[String], date: PuzzleDate) -> Result<(), StoreError> {
        let mut data = self.load()?;
        for word in words {
            data.used_words.insert(word.to_uppercase(), date);
        }
        self.save(data)
    }
}

impl PuzzleStore for JsonStore {
    fn load_puzzle(&self, date: PuzzleDate) -> Result<Option<Puzzle>, StoreError> {
        Ok(self.load()?.puzzles.remove(&date))
    }

    fn save_puzzle(&self, date: PuzzleDate, puzzle: &Puzzle) -> Result<(), StoreError> {
        let mut data = self.load()?;
        data.puzzles.insert(date, puzzle.clone());
        self.save(data)
    }
}
