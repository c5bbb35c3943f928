use crate::game::Game;
use crate::theme::Theme;
use crossword_core::{Direction, Puzzle, PuzzleDate, WordPlacement};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use std::time::Duration;

/// Result of handling a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    pub game: Game,
    /// Date the puzzle belongs to, shown in the header
    pub date: PuzzleDate,
    /// Selected cell as `(row, col)`
    pub cursor: (usize, usize),
    /// Direction the cursor advances in while typing
    pub direction: Direction,
    pub theme: Theme,
    pub message: Option<String>,
    message_timer: u32,
    rng: StdRng,
}

impl App {
    pub fn new(puzzle: Puzzle, date: PuzzleDate, rng: StdRng) -> Self {
        let cursor = puzzle.letter_cells().first().copied().unwrap_or((0, 0));
        Self {
            game: Game::new(puzzle),
            date,
            cursor,
            direction: Direction::Across,
            theme: Theme::dark(),
            message: None,
            message_timer: 0,
            rng,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Expire the status message
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Esc => return AppAction::Quit,

            KeyCode::Up => self.navigate(Direction::Down, -1),
            KeyCode::Down => self.navigate(Direction::Down, 1),
            KeyCode::Left => self.navigate(Direction::Across, -1),
            KeyCode::Right => self.navigate(Direction::Across, 1),
            KeyCode::Tab => self.direction = self.direction.other(),

            KeyCode::Char('?') | KeyCode::F(1) => match self.game.hint(&mut self.rng) {
                Some((row, col)) => {
                    self.cursor = (row, col);
                    self.show_message("Revealed one letter");
                }
                None => self.show_message("No blank cells left"),
            },

            KeyCode::Enter => {
                let result = self.game.check();
                self.show_message(result.message());
            }

            KeyCode::Backspace => {
                let (row, col) = self.cursor;
                if !self.game.clear_entry(row, col) {
                    self.step(-1);
                    let (row, col) = self.cursor;
                    self.game.clear_entry(row, col);
                }
            }
            KeyCode::Delete => {
                let (row, col) = self.cursor;
                self.game.clear_entry(row, col);
            }

            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let (row, col) = self.cursor;
                if self.game.set_entry(row, col, c) {
                    self.step(1);
                }
            }

            _ => {}
        }
        AppAction::Continue
    }

    /// Arrow key movement; also switches the typing direction
    fn navigate(&mut self, direction: Direction, delta: i32) {
        self.direction = direction;
        if let Some(cell) = self.next_letter_cell(direction, delta, true) {
            self.cursor = cell;
        }
    }

    /// Move one cell along the typing direction, staying inside the word
    fn step(&mut self, delta: i32) {
        if let Some(cell) = self.next_letter_cell(self.direction, delta, false) {
            self.cursor = cell;
        }
    }

    /// Nearest letter cell from the cursor, optionally jumping over black cells
    fn next_letter_cell(&self, direction: Direction, delta: i32, skip_black: bool) -> Option<(usize, usize)> {
        let puzzle = self.game.puzzle();
        let (dr, dc) = direction.step();
        let (mut row, mut col) = (self.cursor.0 as i32, self.cursor.1 as i32);

        loop {
            row += dr * delta;
            col += dc * delta;
            if row < 0 || col < 0 || row as usize >= puzzle.grid_size.rows || col as usize >= puzzle.grid_size.cols {
                return None;
            }
            if puzzle.is_letter_cell(row as usize, col as usize) {
                return Some((row as usize, col as usize));
            }
            if !skip_black {
                return None;
            }
        }
    }

    /// Word under the cursor in the typing direction, falling back to the other one
    pub fn current_word(&self) -> Option<&WordPlacement> {
        let (row, col) = self.cursor;
        self.game
            .word_at(row, col, self.direction)
            .or_else(|| self.game.word_at(row, col, self.direction.other()))
    }

    /// Whether `(row, col)` belongs to the word under the cursor
    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        let cell = (row as i32, col as i32);
        self.current_word().is_some_and(|w| w.cells().any(|c| c == cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app() -> App {
        // C A T .
        // . . O .
        // . . E L K
        let puzzle = Puzzle::from_words(vec![
            WordPlacement::new("CAT", 0, 0, Direction::Across),
            WordPlacement::new("TOE", 0, 2, Direction::Down),
            WordPlacement::new("ELK", 2, 2, Direction::Across),
        ]);
        App::new(puzzle, "2024-06-01".parse().unwrap(), StdRng::seed_from_u64(1))
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Continue);
    }

    #[test]
    fn test_typing_advances_within_word() {
        let mut app = app();
        assert_eq!(app.cursor, (0, 0));
        for c in ['c', 'a', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.entry(0, 2), Some('T'));
        // no letter cell after T in the across direction
        assert_eq!(app.cursor, (0, 2));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.direction, Direction::Down);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.cursor, (1, 2));
    }

    #[test]
    fn test_arrows_skip_black_cells() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.direction, Direction::Down);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, (2, 2));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, (2, 2));
    }

    #[test]
    fn test_backspace_moves_back() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.cursor, (0, 2));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.cursor, (0, 1));
        assert_eq!(app.game.entry(0, 1), None);
        assert_eq!(app.game.entry(0, 0), Some('C'));
    }

    #[test]
    fn test_hint_and_check_messages() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Not correct yet."));

        for _ in 0..7 {
            press(&mut app, KeyCode::Char('?'));
        }
        assert_eq!(app.game.hints_used(), 7);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.message.as_deref(), Some("No blank cells left"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Puzzle solved!"));
        assert!(app.game.is_solved());
    }

    #[test]
    fn test_message_expires() {
        let mut app = app();
        app.show_message("hello");
        for _ in 0..30 {
            app.tick();
        }
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_highlight_follows_direction() {
        let mut app = app();
        app.cursor = (0, 2);
        assert!(app.is_highlighted(0, 0));
        assert!(!app.is_highlighted(2, 2));

        app.direction = Direction::Down;
        assert!(app.is_highlighted(2, 2));
        assert!(!app.is_highlighted(0, 0));

        // (2, 4) only belongs to an across word
        app.cursor = (2, 4);
        assert_eq!(app.current_word().unwrap().word, "ELK");
    }
}
