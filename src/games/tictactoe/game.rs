//! Game state with move history and time travel.
//!
//! [`Game`] is the only stateful piece of the crate. It stores every board
//! snapshot since the start of the game plus a pointer to the one currently
//! displayed. Whose turn it is and whether the game is over are derived from
//! that pair on every read.

use super::rules::{Outcome, calculate_winner};
use super::types::{Board, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Why a click left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner or is a draw.
    #[display("game is over")]
    GameOver,
    /// The clicked square already holds a mark.
    #[display("square is occupied")]
    Occupied,
}

/// Result of [`Game::handle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The player placed a mark and a new snapshot was recorded.
    Placed(Player),
    /// The click was not a legal move; nothing changed.
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// Returns true if the click produced a move.
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed(_))
    }
}

/// Tic-tac-toe game with a single-branch history.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `step_number < history.len()`
/// - `history[i]` holds exactly `i` marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step_number: usize,
}

impl Game {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently displayed.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// The snapshot currently displayed.
    pub fn current(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// Returns true if X moves next from the displayed snapshot.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Player who moves next from the displayed snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Outcome of the displayed snapshot, `None` while the game is open.
    pub fn outcome(&self) -> Option<Outcome> {
        calculate_winner(self.current())
    }

    /// Attempts a move at `pos` on the displayed snapshot.
    ///
    /// Any snapshots after the displayed one are discarded before the new
    /// snapshot is appended. When the displayed board is already decided or
    /// the square is taken, the game is left exactly as it was, including
    /// any future snapshots.
    #[instrument(skip(self), fields(step = self.step_number, len = self.history.len()))]
    pub fn handle_click(&mut self, pos: Position) -> ClickOutcome {
        let current = self.current();

        if calculate_winner(current).is_some() {
            debug!("Click ignored, game is over");
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !current.is_empty(pos) {
            debug!("Click ignored, square occupied");
            return ClickOutcome::Ignored(IgnoreReason::Occupied);
        }

        let player = self.next_player();
        let squares = current.with_mark(pos, player);

        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(squares);
        self.step_number = self.history.len() - 1;

        info!(
            %player,
            position = %pos,
            discarded,
            board = %serde_json::to_string(&squares).unwrap_or_default(),
            "Move placed"
        );
        ClickOutcome::Placed(player)
    }

    /// Displays the snapshot at `step`.
    ///
    /// History is not modified. Returns false and leaves the pointer alone
    /// when `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!("Jump ignored, step out of range");
            return false;
        }
        self.step_number = step;
        info!(step, next = %self.next_player(), "Jumped");
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, indices: &[usize]) {
        for &i in indices {
            let pos = Position::from_index(i).unwrap();
            assert!(game.handle_click(pos).is_placed(), "move at {} should apply", i);
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_click_appends_snapshot_and_flips_turn() {
        let mut game = Game::new();
        assert_eq!(game.handle_click(Position::Center), ClickOutcome::Placed(Player::X));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step_number(), 1);
        assert!(!game.x_is_next());
        assert!(game.history()[0].is_empty(Position::Center));
    }

    #[test]
    fn test_history_snapshot_counts() {
        let mut game = Game::new();
        play(&mut game, &[4, 0, 8, 2]);
        for (i, board) in game.history().iter().enumerate() {
            assert_eq!(board.occupied(), i);
        }
    }

    #[test]
    fn test_occupied_click_is_noop() {
        let mut game = Game::new();
        play(&mut game, &[4]);
        let before = game.clone();
        assert_eq!(
            game.handle_click(Position::Center),
            ClickOutcome::Ignored(IgnoreReason::Occupied)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_occupied_click_in_past_keeps_future() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2]);
        assert!(game.jump_to(1));
        let before = game.clone();
        game.handle_click(Position::TopLeft);
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = Game::new();
        play(&mut game, &[0]);
        assert!(!game.jump_to(2));
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_jump_rederives_turn() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2]);
        assert!(game.jump_to(2));
        assert!(game.x_is_next());
        assert!(game.jump_to(1));
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.history().len(), 4);
    }
}
