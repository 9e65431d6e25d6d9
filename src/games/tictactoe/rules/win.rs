//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use super::{Outcome, is_full};
use tracing::instrument;

/// The 8 winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line in [`LINES`] order and its owner.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Evaluates a board snapshot.
///
/// Returns `Some(Outcome::Winner(_))` for the first completed line,
/// `Some(Outcome::Draw)` when every square is taken without a line, and
/// `None` while the game is still open.
#[instrument]
pub fn calculate_winner(board: &Board) -> Option<Outcome> {
    if let Some((player, _)) = winning_line(board) {
        return Some(Outcome::Winner(player));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
