//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. Nothing
//! here knows about history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{calculate_winner, winning_line};

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board that has reached an end state.
///
/// "No result yet" is represented by `Option::None` around this type, which
/// keeps the draw sentinel distinct from both player wins and an open game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board is full with no completed line.
    Draw,
}
