//! Render model derived from a [`Game`].

use super::rules::{Outcome, winning_line};
use super::types::Board;
use super::{Game, Position};
use tracing::instrument;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the entry of the displayed snapshot, rendered emphasized.
    pub current: bool,
}

impl MoveEntry {
    fn new(step: usize, current_step: usize) -> Self {
        let label = if step > 0 {
            format!("Go to move #{}", step)
        } else {
            "Go to game start".to_string()
        };
        Self {
            step,
            label,
            current: step == current_step,
        }
    }
}

/// Everything needed to draw one frame of the game.
///
/// Built fresh from the game on every render; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Snapshot being displayed.
    pub board: Board,
    /// Status line above the move list.
    pub status: String,
    /// One entry per history snapshot.
    pub moves: Vec<MoveEntry>,
    /// Outcome of the displayed snapshot.
    pub outcome: Option<Outcome>,
    /// Squares of the completed line, if any.
    pub winning_line: Option<[Position; 3]>,
}

impl GameView {
    /// Derives the view of `game` at its current step.
    #[instrument(skip(game), fields(step = game.step_number()))]
    pub fn new(game: &Game) -> Self {
        let board = *game.current();
        let outcome = game.outcome();
        let status = match outcome {
            Some(Outcome::Draw) => "It's a draw!".to_string(),
            Some(Outcome::Winner(player)) => format!("Winner: {}!", player),
            None => format!("Next player: {}", game.next_player()),
        };
        let moves = (0..game.history().len())
            .map(|step| MoveEntry::new(step, game.step_number()))
            .collect();

        Self {
            board,
            status,
            moves,
            outcome,
            winning_line: winning_line(&board).map(|(_, line)| line),
        }
    }
}
