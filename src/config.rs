//! Stylesheet for the terminal UI.
//!
//! Styling lives outside the game logic. A stylesheet is an optional TOML
//! file; every key has a default, so an empty file is valid.
//!
//! ```toml
//! x_color = "blue"
//! o_color = "#ff5555"
//! square_width = 7
//! ```

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Smallest square that still fits a border around one character.
pub const MIN_SQUARE_SIZE: u16 = 3;

/// Raw stylesheet as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Border color of squares and the move list.
    #[serde(default = "default_empty_color")]
    empty_color: String,

    /// Border color of the focused square or selected move.
    #[serde(default = "default_focus_color")]
    focus_color: String,

    /// Background of the squares in a completed line.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// Width of one square in terminal cells, borders included.
    #[serde(default = "default_square_width")]
    square_width: u16,

    /// Height of one square in terminal cells, borders included.
    #[serde(default = "default_square_height")]
    square_height: u16,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_empty_color() -> String {
    "darkgray".to_string()
}

fn default_focus_color() -> String {
    "yellow".to_string()
}

fn default_highlight_color() -> String {
    "green".to_string()
}

fn default_square_width() -> u16 {
    7
}

fn default_square_height() -> u16 {
    3
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            empty_color: default_empty_color(),
            focus_color: default_focus_color(),
            highlight_color: default_highlight_color(),
            square_width: default_square_width(),
            square_height: default_square_height(),
        }
    }
}

impl Stylesheet {
    /// Loads a stylesheet from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading stylesheet from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read stylesheet: {}", e)))?;
        let sheet = Self::from_toml(&content)?;
        info!("Stylesheet loaded");
        Ok(sheet)
    }

    /// Parses a stylesheet from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse stylesheet: {}", e)))
    }
}

/// Stylesheet resolved into values the renderer can use directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Border color of idle controls.
    pub empty: Color,
    /// Border color of the focused control.
    pub focus: Color,
    /// Background of winning squares.
    pub highlight: Color,
    /// Square width in cells.
    pub square_width: u16,
    /// Square height in cells.
    pub square_height: u16,
}

impl TryFrom<&Stylesheet> for Theme {
    type Error = ConfigError;

    #[instrument(skip(sheet))]
    fn try_from(sheet: &Stylesheet) -> Result<Self, Self::Error> {
        if sheet.square_width < MIN_SQUARE_SIZE || sheet.square_height < MIN_SQUARE_SIZE {
            return Err(ConfigError::new(format!(
                "Squares must be at least {0}x{0}, got {1}x{2}",
                MIN_SQUARE_SIZE, sheet.square_width, sheet.square_height
            )));
        }
        Ok(Self {
            x: parse_color("x_color", &sheet.x_color)?,
            o: parse_color("o_color", &sheet.o_color)?,
            empty: parse_color("empty_color", &sheet.empty_color)?,
            focus: parse_color("focus_color", &sheet.focus_color)?,
            highlight: parse_color("highlight_color", &sheet.highlight_color)?,
            square_width: sheet.square_width,
            square_height: sheet.square_height,
        })
    }
}

impl Theme {
    /// Color used for `player`'s marks.
    pub fn mark_color(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            empty: Color::DarkGray,
            focus: Color::Yellow,
            highlight: Color::Green,
            square_width: default_square_width(),
            square_height: default_square_height(),
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown color {:?} for {}", value, key)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
