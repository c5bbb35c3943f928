use crate::app::App;
use crossword_core::{Direction, Puzzle, WordPlacement};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::io;

/// Terminal columns per grid cell, left border included
const CELL_WIDTH: u16 = 4;
const CLUE_WIDTH: usize = 40;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let puzzle = app.game.puzzle();
    let grid_width = puzzle.grid_size.cols as u16 * CELL_WIDTH + 1;
    let grid_height = puzzle.grid_size.rows as u16 * 2 + 1;

    let x = 2;
    let y = 2;
    render_header(stdout, app, x, 0)?;
    render_grid(stdout, app, x, y)?;

    let side_by_side = term_width > grid_width + CLUE_WIDTH as u16 + 6;
    let (clue_x, clue_y) = if side_by_side {
        (x + grid_width + 3, y)
    } else {
        (x, y + grid_height + 1)
    };
    let clues_end = render_clues(stdout, app, clue_x, clue_y, term_height)?;

    let controls_y = if side_by_side {
        (y + grid_height + 1).max(clues_end + 1)
    } else {
        clues_end + 1
    };
    render_controls(stdout, app, x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    let (row, col) = app.cursor;
    execute!(
        stdout,
        MoveTo(x + col as u16 * CELL_WIDTH + 2, y + row as u16 * 2 + 1),
        Show
    )?;
    Ok(())
}

fn render_header(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let puzzle = app.game.puzzle();
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print(format!("DAILY CROSSWORD  {}", app.date)),
        SetForegroundColor(theme.info),
        Print(format!(
            "   {} / {}   Time {}   Hints {}",
            puzzle.across_theme,
            puzzle.down_theme,
            app.game.elapsed_string(),
            app.game.hints_used()
        ))
    )
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let game = &app.game;
    let puzzle = game.puzzle();
    let solved = game.is_solved();
    let wrong: HashSet<(usize, usize)> = if game.checks() > 0 {
        game.wrong_cells().into_iter().collect()
    } else {
        HashSet::new()
    };

    // +1--+---+
    // | C | A |
    // +---+---+
    for row in 0..puzzle.grid_size.rows {
        let line_y = y + row as u16 * 2;
        execute!(
            stdout,
            MoveTo(x, line_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border)
        )?;
        for col in 0..puzzle.grid_size.cols {
            execute!(stdout, SetForegroundColor(theme.border), Print("+"))?;
            match puzzle.number_at(row, col) {
                Some(number) => execute!(
                    stdout,
                    SetForegroundColor(theme.number),
                    Print(number_label(number))
                )?,
                None => execute!(stdout, Print("---"))?,
            }
        }
        execute!(stdout, SetForegroundColor(theme.border), Print("+"))?;

        execute!(stdout, MoveTo(x, line_y + 1))?;
        for col in 0..puzzle.grid_size.cols {
            execute!(
                stdout,
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;

            if !puzzle.is_letter_cell(row, col) {
                execute!(stdout, SetBackgroundColor(theme.black_cell), Print("   "))?;
                continue;
            }

            let bg = if (row, col) == app.cursor {
                theme.cursor_bg
            } else if app.is_highlighted(row, col) {
                theme.highlight_bg
            } else {
                theme.bg
            };
            let fg = if solved {
                theme.success
            } else if wrong.contains(&(row, col)) {
                theme.error
            } else {
                theme.letter
            };
            let letter = game.entry(row, col).unwrap_or(' ');
            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(format!(" {} ", letter))
            )?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
    }

    let bottom_y = y + puzzle.grid_size.rows as u16 * 2;
    execute!(
        stdout,
        MoveTo(x, bottom_y),
        SetForegroundColor(theme.border),
        Print(border_line(puzzle.grid_size.cols))
    )
}

/// Draws both clue lists and returns the first free row below them
fn render_clues(stdout: &mut io::Stdout, app: &App, x: u16, y: u16, term_height: u16) -> io::Result<u16> {
    let theme = &app.theme;
    let puzzle = app.game.puzzle();
    let current = app.current_word();
    let mut line_y = y;

    for direction in Direction::all() {
        if line_y >= term_height {
            break;
        }
        execute!(
            stdout,
            MoveTo(x, line_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(direction.to_string().to_uppercase())
        )?;
        line_y += 1;

        for word in puzzle.words_in(*direction) {
            let active = current.is_some_and(|c| c == word);
            let color = if active { theme.fg } else { theme.info };
            for line in wrap_text(&clue_line(word), CLUE_WIDTH) {
                if line_y >= term_height {
                    break;
                }
                execute!(
                    stdout,
                    MoveTo(x, line_y),
                    SetForegroundColor(color),
                    Print(line)
                )?;
                line_y += 1;
            }
        }
        line_y += 1;
    }

    Ok(line_y)
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("Arrows", "Move"),
        ("A-Z", "Type"),
        ("Bksp", "Erase"),
        ("Tab", "Direction"),
        ("?/F1", "Hint"),
        ("Enter", "Check"),
        ("Esc", "Quit"),
    ];

    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 2;
        let row = i % 2;
        execute!(
            stdout,
            MoveTo(x + col as u16 * 17, y + row as u16),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(format!("{:>6}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App, msg: &str, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.len() as u16) / 2;
    let fg = if app.game.is_solved() { theme.success } else { theme.fg };

    execute!(
        stdout,
        MoveTo(x, 1),
        SetForegroundColor(fg),
        SetBackgroundColor(theme.cursor_bg),
        Print(&padded),
        SetBackgroundColor(theme.bg)
    )
}

/// Three-character label for a cell's top border, e.g. `1--` or `12-`
fn number_label(number: u32) -> String {
    format!("{:-<3}", number)
}

fn border_line(cols: usize) -> String {
    let mut line = "+---".repeat(cols);
    line.push('+');
    line
}

fn clue_line(word: &WordPlacement) -> String {
    format!("{:>2}. {} ({})", word.number, word.clue, word.len())
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_width && !current.is_empty() {
            lines.push(current);
            current = String::from("    ");
        }
        if !current.trim().is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.trim().is_empty() {
        lines.push(current);
    }
    lines
}

/// Solution grid and numbered clues as plain text
pub fn plain_text(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Themes: {} (across), {} (down)", puzzle.across_theme, puzzle.down_theme);
    let _ = writeln!(out);
    for row in &puzzle.grid {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    for direction in Direction::all() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", direction.to_string().to_uppercase());
        for word in puzzle.words_in(*direction) {
            let _ = writeln!(out, "{}  {}", clue_line(word), word.word);
        }
    }
    out
}
