use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Grid lines
    pub border: Color,
    /// Fill for cells no word passes through
    pub black_cell: Color,
    /// Letters typed by the player
    pub letter: Color,
    /// Small clue numbers in cell corners
    pub number: Color,
    pub cursor_bg: Color,
    /// Cells of the word under the cursor
    pub highlight_bg: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            black_cell: Color::Rgb { r: 45, g: 48, b: 60 },
            letter: Color::Rgb { r: 80, g: 180, b: 255 },
            number: Color::Rgb { r: 140, g: 150, b: 180 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            highlight_bg: Color::Rgb { r: 35, g: 40, b: 55 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            black_cell: Color::Rgb { r: 40, g: 40, b: 50 },
            letter: Color::Rgb { r: 30, g: 100, b: 200 },
            number: Color::Rgb { r: 110, g: 110, b: 130 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            highlight_bg: Color::Rgb { r: 230, g: 232, b: 242 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }
}
