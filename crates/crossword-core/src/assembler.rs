use crate::grid::{Direction, SparseGrid};
use crate::placement::WordPlacement;
use crate::puzzle::Puzzle;
use crate::search::find_positions;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the assembler picks the direction of the next word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlternationPolicy {
    /// The seed runs across, the second word down, then directions alternate
    #[default]
    StartDownThenAlternate,
}

impl AlternationPolicy {
    /// Direction for the next word given how many words are already placed
    pub fn direction_for(self, placed: usize) -> Direction {
        match self {
            AlternationPolicy::StartDownThenAlternate => {
                if placed % 2 == 1 {
                    Direction::Down
                } else {
                    Direction::Across
                }
            }
        }
    }
}

/// Uppercase `words`, keeping alphabetic words of at least `min_length`
/// letters that are not in `exclude`. First occurrence wins on duplicates.
pub fn clean_words(words: &[String], min_length: usize, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|w| w.trim().to_uppercase())
        .filter(|w| w.chars().count() >= min_length && w.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|w| !exclude.contains(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Remaining words for each direction.
///
/// The two pools never share a word. Words are removed as they are drawn,
/// whether or not they end up placed.
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    across: Vec<String>,
    down: Vec<String>,
}

impl CandidatePools {
    pub fn new(across: &[String], down: &[String], recent: &HashSet<String>, min_length: usize) -> Self {
        let across = clean_words(across, min_length, recent);
        let taken: HashSet<String> = across.iter().cloned().collect();
        let down = clean_words(down, min_length, recent)
            .into_iter()
            .filter(|w| !taken.contains(w))
            .collect();
        Self { across, down }
    }

    pub fn len(&self, direction: Direction) -> usize {
        self.pool(direction).len()
    }

    pub fn is_empty(&self, direction: Direction) -> bool {
        self.pool(direction).is_empty()
    }

    pub fn contains(&self, direction: Direction, word: &str) -> bool {
        self.pool(direction).iter().any(|w| w == word)
    }

    /// Remove and return a uniformly random word, `None` once the pool is empty
    pub fn take_random<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> Option<String> {
        let pool = match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        };
        if pool.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..pool.len());
        Some(pool.swap_remove(index))
    }

    fn pool(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }
}

/// Words and grid of one successful assembly, before clue attachment
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub words: Vec<WordPlacement>,
    pub grid: SparseGrid,
}

impl Layout {
    /// Shift everything so the smallest occupied row and column are 0
    pub fn normalize(&mut self) {
        let bounds = self.grid.bounds();
        for word in &mut self.words {
            word.shift(bounds.min_row, bounds.min_col);
        }
        self.grid = self.grid.shifted(bounds.min_row, bounds.min_col);
    }

    pub fn into_puzzle(mut self) -> Puzzle {
        self.normalize();
        Puzzle::from_words(self.words)
    }
}

/// Builds a layout by placing words one at a time from two pools
#[derive(Debug, Clone, Copy)]
pub struct Assembler {
    pub target_words: usize,
    pub policy: AlternationPolicy,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            target_words: 10,
            policy: AlternationPolicy::default(),
        }
    }
}

impl Assembler {
    pub fn new(target_words: usize) -> Self {
        Self {
            target_words,
            ..Self::default()
        }
    }

    /// Place words until `target_words` are on the grid.
    ///
    /// A random across word seeds the grid at `(0, 0)`. Each following word
    /// is drawn from the pool chosen by the policy; a word with no legal
    /// position is dropped. Returns `None` as soon as a needed pool runs dry.
    /// The returned layout is already normalized.
    pub fn assemble<R: Rng + ?Sized>(&self, mut pools: CandidatePools, rng: &mut R) -> Option<Layout> {
        let seed = pools.take_random(Direction::Across, rng)?;
        let mut layout = Layout::default();
        layout.grid.place(&seed, 0, 0, Direction::Across);
        layout.words.push(WordPlacement::new(seed, 0, 0, Direction::Across));

        while layout.words.len() < self.target_words {
            let direction = self.policy.direction_for(layout.words.len());
            let Some(word) = pools.take_random(direction, rng) else {
                debug!(
                    "{} pool exhausted after placing {} of {} words",
                    direction,
                    layout.words.len(),
                    self.target_words
                );
                return None;
            };

            let positions = find_positions(&layout.grid, &layout.words, &word, direction);
            let Some(&(row, col)) = positions.choose(rng) else {
                trace!("no position for {} {}", word, direction);
                continue;
            };

            layout.grid.place(&word, row, col, direction);
            layout.words.push(WordPlacement::new(word, row, col, direction));
        }

        layout.normalize();
        Some(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::check_words;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn rich_pools() -> CandidatePools {
        let across = strings(&[
            "TIGER", "LASER", "EARTH", "RIVER", "HONEY", "SOLAR", "OCEAN", "STORM", "EAGLE", "BRAIN", "PLANE",
            "SMILE", "SPACE", "CHAIR", "HORSE", "CAMEL", "OTTER", "HERON", "RAVEN", "TREES",
        ]);
        let down = strings(&[
            "ROBOT", "CLOUD", "ZEBRA", "MANGO", "PIZZA", "MUSIC", "BRICK", "SPORT", "CYCLE", "LIGHT", "PARTY",
            "NEURON", "PYTHON", "APPLE", "STONE", "TRAIN", "SNAKE", "RATES", "NOTES", "LEARN",
        ]);
        CandidatePools::new(&across, &down, &HashSet::new(), 3)
    }

    #[test]
    fn test_alternation_starts_down() {
        let policy = AlternationPolicy::default();
        assert_eq!(policy.direction_for(1), Direction::Down);
        assert_eq!(policy.direction_for(2), Direction::Across);
        assert_eq!(policy.direction_for(3), Direction::Down);
    }

    #[test]
    fn test_clean_words() {
        let mut recent = HashSet::new();
        recent.insert("OWL".to_string());
        let words = strings(&["cat", "owl", "ox", "sea-lion", " Cat ", "Heron", "t1ger"]);
        assert_eq!(clean_words(&words, 3, &recent), strings(&["CAT", "HERON"]));
    }

    #[test]
    fn test_pools_are_disjoint() {
        let pools = CandidatePools::new(
            &strings(&["apple", "mango"]),
            &strings(&["Mango", "pizza"]),
            &HashSet::new(),
            3,
        );
        assert_eq!(pools.len(Direction::Across), 2);
        assert_eq!(pools.len(Direction::Down), 1);
        assert!(pools.contains(Direction::Down, "PIZZA"));
        assert!(!pools.contains(Direction::Down, "MANGO"));
    }

    #[test]
    fn test_take_random_drains_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pools = CandidatePools::new(&strings(&["one", "two"]), &[], &HashSet::new(), 3);
        let mut drawn = vec![
            pools.take_random(Direction::Across, &mut rng).unwrap(),
            pools.take_random(Direction::Across, &mut rng).unwrap(),
        ];
        drawn.sort();
        assert_eq!(drawn, strings(&["ONE", "TWO"]));
        assert_eq!(pools.take_random(Direction::Across, &mut rng), None);
        assert!(pools.is_empty(Direction::Across));
    }

    #[test]
    fn test_small_down_pool_fails() {
        let across = strings(&[
            "TIGER", "LASER", "EARTH", "RIVER", "HONEY", "SOLAR", "OCEAN", "STORM", "EAGLE", "BRAIN",
        ]);
        let down = strings(&["ROBOT", "CLOUD"]);
        let assembler = Assembler::new(10);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pools = CandidatePools::new(&across, &down, &HashSet::new(), 3);
            assert!(assembler.assemble(pools, &mut rng).is_none());
        }
    }

    #[test]
    fn test_empty_across_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let pools = CandidatePools::new(&[], &strings(&["ROBOT"]), &HashSet::new(), 3);
        assert!(Assembler::new(2).assemble(pools, &mut rng).is_none());
    }

    #[test]
    fn test_single_word_target() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = Assembler::new(1).assemble(rich_pools(), &mut rng).unwrap();
        assert_eq!(layout.words.len(), 1);
        assert_eq!(layout.words[0].start(), (0, 0));
        assert_eq!(layout.words[0].direction, Direction::Across);
    }

    #[test]
    fn test_normalize_shifts_to_origin() {
        // ROCKET spans columns -1..=4, GREENS spans rows -2..=3
        let mut layout = Layout::default();
        for (word, row, col, direction) in [
            ("ROCKET", 0, -1, Direction::Across),
            ("GREENS", -2, 3, Direction::Down),
        ] {
            layout.grid.place(word, row, col, direction);
            layout.words.push(WordPlacement::new(word, row, col, direction));
        }
        let bounds = layout.grid.bounds();
        assert_eq!((bounds.min_row, bounds.max_row), (-2, 3));
        assert_eq!((bounds.min_col, bounds.max_col), (-1, 4));

        layout.normalize();

        assert_eq!(layout.words[0].start(), (2, 0));
        assert_eq!(layout.words[1].start(), (0, 4));
        assert_eq!(layout.grid.get((2, 4)), Some('E'));
        let bounds = layout.grid.bounds();
        assert_eq!((bounds.min_row, bounds.min_col), (0, 0));
        assert_eq!((bounds.rows(), bounds.cols()), (6, 6));
        assert_eq!(check_words(&layout.words), Ok(()));

        let puzzle = layout.into_puzzle();
        assert_eq!(puzzle.grid_size.rows, 6);
        assert_eq!(puzzle.cell(2, 4), Some('E'));
    }

    #[test]
    fn test_assembled_layouts_are_legal() {
        let assembler = Assembler::new(4);
        let mut successes = 0;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let Some(layout) = assembler.assemble(rich_pools(), &mut rng) else {
                continue;
            };
            successes += 1;

            assert_eq!(layout.words.len(), 4);
            assert_eq!(check_words(&layout.words), Ok(()));
            for (i, word) in layout.words.iter().enumerate() {
                let expected = if i % 2 == 0 { Direction::Across } else { Direction::Down };
                assert_eq!(word.direction, expected);
                for (cell, letter) in word.letters() {
                    assert_eq!(layout.grid.get(cell), Some(letter));
                }
            }
            let bounds = layout.grid.bounds();
            assert_eq!((bounds.min_row, bounds.min_col), (0, 0));
        }

        assert!(successes > 0);
    }
}
