//! User intents produced by input handling and applied by [`App`](super::App).

use crate::games::tictactoe::Position;

/// A single user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click on a square (legal or not; the game decides).
    ClickSquare(Position),
    /// Jump to a history step.
    JumpTo(usize),
    /// Move the keyboard cursor on the board.
    MoveCursor(Position),
    /// Highlight a move list entry without jumping.
    SelectMove(usize),
    /// Switch keyboard focus between the board and the move list.
    ToggleFocus,
    /// Leave the application.
    Quit,
}
