//! Tic-tac-toe with time travel.

mod game;
mod position;
pub mod rules;
mod types;
mod view;

pub use game::{ClickOutcome, Game, IgnoreReason};
pub use position::Position;
pub use rules::{Outcome, calculate_winner};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
