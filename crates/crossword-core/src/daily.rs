//! One puzzle per calendar day: reuse the stored one or build a new one with
//! bounded retries.

use crate::assembler::{Assembler, CandidatePools};
use crate::config::GeneratorConfig;
use crate::date::PuzzleDate;
use crate::grid::Direction;
use crate::puzzle::Puzzle;
use crate::sources::{fallback_words, Archive, ClueSource, WordSource};
use crate::validator::{validate_puzzle, ValidationError};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Why a single generation attempt produced nothing
#[derive(Debug, Error)]
pub enum AttemptFailure {
    #[error("fewer than two distinct themes configured")]
    NotEnoughThemes,
    #[error("theme {theme:?} has {found} usable words, {needed} needed")]
    InsufficientCandidates { theme: String, found: usize, needed: usize },
    #[error("ran out of words before placing {target}")]
    PoolExhausted { target: usize },
    #[error("assembled puzzle rejected: {0}")]
    Rejected(#[from] ValidationError),
}

/// Produces the puzzle of the day
pub struct DailyGenerator<R> {
    config: GeneratorConfig,
    rng: R,
    words: Box<dyn WordSource>,
    clues: Box<dyn ClueSource>,
    store: Box<dyn Archive>,
}

impl<R: Rng> DailyGenerator<R> {
    pub fn new(
        config: GeneratorConfig,
        rng: R,
        words: impl WordSource + 'static,
        clues: impl ClueSource + 'static,
        store: impl Archive + 'static,
    ) -> Self {
        Self {
            config,
            rng,
            words: Box::new(words),
            clues: Box::new(clues),
            store: Box::new(store),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn Archive {
        self.store.as_ref()
    }

    /// The puzzle for `date`.
    ///
    /// A valid stored puzzle is returned as is. Otherwise up to
    /// `max_attempts` new puzzles are tried; the first that passes
    /// validation is recorded and returned. `None` means no puzzle today.
    pub fn daily_puzzle(&mut self, date: PuzzleDate) -> Option<Puzzle> {
        match self.store.load_puzzle(date) {
            Ok(Some(puzzle)) => match validate_puzzle(&puzzle) {
                Ok(()) => {
                    info!("Using stored puzzle for {}", date);
                    return Some(puzzle);
                }
                Err(e) => warn!("Stored puzzle for {} is invalid ({}), regenerating", date, e),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read stored puzzle for {}: {}", date, e),
        }

        let recent = self
            .store
            .recently_used(date, self.config.recent_days)
            .unwrap_or_else(|e| {
                warn!("Could not read recently used words: {}", e);
                HashSet::new()
            });

        let max_attempts = self.config.max_attempts;
        for attempt in 1..=max_attempts {
            match self.generate(&recent) {
                Ok(puzzle) => {
                    info!(
                        "Generated puzzle for {} on attempt {} ({} across, {} down)",
                        date, attempt, puzzle.across_theme, puzzle.down_theme
                    );
                    self.persist(date, &puzzle);
                    return Some(puzzle);
                }
                Err(failure) => debug!("Attempt {}/{} failed: {}", attempt, max_attempts, failure),
            }
        }

        warn!("No puzzle for {} after {} attempts", date, max_attempts);
        None
    }

    /// One attempt: pick themes, build pools, assemble, attach clues, validate
    pub fn generate(&mut self, recent: &HashSet<String>) -> Result<Puzzle, AttemptFailure> {
        let mut distinct: Vec<String> = Vec::new();
        for theme in &self.config.themes {
            if !distinct.contains(theme) {
                distinct.push(theme.clone());
            }
        }
        let themes: Vec<String> = distinct.choose_multiple(&mut self.rng, 2).cloned().collect();
        let [across_theme, down_theme] = themes.as_slice() else {
            return Err(AttemptFailure::NotEnoughThemes);
        };
        debug!("Themes: {} across, {} down", across_theme, down_theme);

        let across_words = self.theme_words(across_theme, &[]);
        let down_words = self.theme_words(down_theme, &across_words);
        let pools = CandidatePools::new(&across_words, &down_words, recent, self.config.min_word_length);

        for (direction, theme) in [(Direction::Across, across_theme), (Direction::Down, down_theme)] {
            let found = pools.len(direction);
            if found < self.config.min_pool_size {
                return Err(AttemptFailure::InsufficientCandidates {
                    theme: theme.clone(),
                    found,
                    needed: self.config.min_pool_size,
                });
            }
        }

        let assembler = Assembler {
            target_words: self.config.target_words,
            policy: self.config.policy,
        };
        let layout = assembler
            .assemble(pools, &mut self.rng)
            .ok_or(AttemptFailure::PoolExhausted {
                target: self.config.target_words,
            })?;

        let mut puzzle = layout.into_puzzle();
        puzzle.across_theme = across_theme.clone();
        puzzle.down_theme = down_theme.clone();

        let mut clues = HashMap::new();
        for (direction, theme) in [(Direction::Across, across_theme), (Direction::Down, down_theme)] {
            let words: Vec<String> = puzzle.words_in(direction).iter().map(|w| w.word.clone()).collect();
            match self.clues.fetch_clues(&words, theme) {
                Ok(found) => clues.extend(found.into_iter().map(|(word, clue)| (word.to_uppercase(), clue))),
                Err(e) => warn!("No clues for {}: {}", theme, e),
            }
        }
        puzzle.attach_clues(&clues);

        validate_puzzle(&puzzle)?;
        Ok(puzzle)
    }

    /// Words for `theme`, or fallback words not in `exclude` when the source
    /// fails or comes back empty
    fn theme_words(&mut self, theme: &str, exclude: &[String]) -> Vec<String> {
        let count = self.config.words_per_theme;
        match self
            .words
            .fetch_theme_words(theme, count, self.config.min_word_length)
        {
            Ok(words) if !words.is_empty() => words,
            Ok(_) => {
                warn!("Word source returned nothing for {}, using fallback words", theme);
                fallback_words(&mut self.rng, count, exclude)
            }
            Err(e) => {
                warn!("Word source failed for {} ({}), using fallback words", theme, e);
                fallback_words(&mut self.rng, count, exclude)
            }
        }
    }

    fn persist(&self, date: PuzzleDate, puzzle: &Puzzle) {
        let words: Vec<String> = puzzle.words.iter().map(|w| w.word.clone()).collect();
        if let Err(e) = self.store.record_used(&words, date) {
            warn!("Could not record used words for {}: {}", date, e);
        }
        if let Err(e) = self.store.save_puzzle(date, puzzle) {
            warn!("Could not save puzzle for {}: {}", date, e);
        }
    }
}
