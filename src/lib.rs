//! Rewind tic-tac-toe library.
//!
//! A two-player tic-tac-toe game that keeps every board snapshot, so play
//! can jump back to any earlier move and branch from there.
//!
//! # Architecture
//!
//! - **Games**: the [`Game`] state (history + step pointer) and pure rules
//! - **View**: [`GameView`], the status text and move list derived from a game
//! - **TUI**: ratatui components (square, board, move list) and the event loop
//! - **Config**: [`Stylesheet`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameView, Position};
//!
//! let mut game = Game::new();
//! game.handle_click(Position::Center);
//! assert_eq!(GameView::new(&game).status, "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, MIN_SQUARE_SIZE, Stylesheet, Theme};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, ClickOutcome, Game, GameView, IgnoreReason, MoveEntry, Outcome, Player, Position,
    Square, calculate_winner,
};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, BoardGrid, BoardLayout, Focus, GameLayout, GameScreen, MoveList, SquareButton,
    draw, key_action, mouse_action, move_cursor, run_tui,
};
