mod app;
mod game;
mod logging;
mod render;
mod store;
mod theme;
mod words;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::{DailyGenerator, GeneratorConfig, PuzzleDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use store::JsonStore;
use theme::Theme;
use words::BuiltinWordSource;

/// Daily themed crossword
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle date as YYYY-MM-DD (defaults to today, UTC)
    #[arg(short, long)]
    date: Option<PuzzleDate>,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generation attempts before giving up
    #[arg(short, long)]
    retries: Option<usize>,

    /// Number of words in the puzzle
    #[arg(short = 'w', long)]
    target_words: Option<usize>,

    /// Store file for used words and past puzzles
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Print the solution and clues instead of playing
    #[arg(short, long)]
    print: bool,

    /// Use the light color theme
    #[arg(long)]
    light: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default().with_themes(BuiltinWordSource::themes());
        if let Some(retries) = self.retries {
            config.max_attempts = retries;
        }
        if let Some(target_words) = self.target_words {
            config.target_words = target_words;
        }
        config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    let date = cli.date.unwrap_or_else(PuzzleDate::today);
    let store = match &cli.data_file {
        Some(path) => JsonStore::at(path),
        None => JsonStore::new(),
    };
    log::debug!("Using store at {}", store.path().display());

    let mut daily = DailyGenerator::new(
        cli.generator_config(),
        cli.rng(),
        BuiltinWordSource::new(),
        BuiltinWordSource::new(),
        store,
    );
    let puzzle = daily.daily_puzzle(date).ok_or("Failed to generate puzzle.")?;

    if cli.print {
        print!("{}", render::plain_text(&puzzle));
        return Ok(());
    }

    let mut app = App::new(puzzle, date, cli.rng());
    if cli.light {
        app.theme = Theme::light();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, &mut app);

    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result?;
    if app.game.is_solved() {
        println!(
            "Solved the {} crossword in {} with {} hints.",
            date,
            app.game.elapsed_string(),
            app.game.hints_used()
        );
    }
    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        let timeout = app.tick_rate().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == AppAction::Quit {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate() {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "crossword",
            "--date",
            "2024-06-01",
            "--seed",
            "7",
            "--retries",
            "5",
            "--target-words",
            "8",
            "--print",
        ])
        .unwrap();

        assert_eq!(cli.date, Some("2024-06-01".parse().unwrap()));
        assert!(cli.print);
        let config = cli.generator_config();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.target_words, 8);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["crossword", "--date", "June 1"]).is_err());
    }

    #[test]
    fn test_seeded_print_is_reproducible() {
        let dir = std::env::temp_dir();
        let make = |name: &str| {
            let path = dir.join(format!("crossword_main_{}_{}.json", std::process::id(), name));
            let _ = std::fs::remove_file(&path);
            let cli = Cli::try_parse_from(["crossword", "--seed", "3", "--target-words", "6"]).unwrap();
            let mut daily = DailyGenerator::new(
                cli.generator_config(),
                cli.rng(),
                BuiltinWordSource::new(),
                BuiltinWordSource::new(),
                JsonStore::at(&path),
            );
            let puzzle = daily.daily_puzzle("2024-06-01".parse().unwrap());
            let _ = std::fs::remove_file(&path);
            puzzle
        };

        let first = make("a");
        assert!(first.is_some());
        assert_eq!(first, make("b"));
    }
}
