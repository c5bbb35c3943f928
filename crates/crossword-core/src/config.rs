use crate::assembler::AlternationPolicy;

/// Themes a daily puzzle draws its two word lists from
pub const DEFAULT_THEMES: &[&str] = &["animals", "technology", "food", "sports", "movies", "science"];

/// Configuration for daily puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Words a finished puzzle must contain
    pub target_words: usize,
    /// Maximum attempts before giving up for the day
    pub max_attempts: usize,
    /// Words requested from the word source per theme
    pub words_per_theme: usize,
    /// Shortest word accepted into a pool
    pub min_word_length: usize,
    /// Smallest pool an attempt may start with
    pub min_pool_size: usize,
    /// Words used within this many days are kept out of the pools
    pub recent_days: u32,
    pub themes: Vec<String>,
    pub policy: AlternationPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_words: 10,
            max_attempts: 20,
            words_per_theme: 50,
            min_word_length: 3,
            min_pool_size: 5,
            recent_days: 14,
            themes: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            policy: AlternationPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }
}
