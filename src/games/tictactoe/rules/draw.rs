//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == 9
}

#[cfg(test)]
mod tests {
    use super::super::super::{Game, Position};
    use super::super::{Outcome, calculate_winner};
    use super::*;

    fn play(indices: &[usize]) -> Game {
        let mut game = Game::new();
        for &i in indices {
            game.handle_click(Position::ALL[i]);
        }
        game
    }

    #[test]
    fn test_only_last_snapshot_of_full_game_is_full() {
        // X O X / X O O / O X X
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let history = game.history();
        assert_eq!(history.len(), 10);
        for (step, board) in history.iter().enumerate() {
            assert_eq!(is_full(board), board.occupied() == 9);
            assert_eq!(is_full(board), step == 9, "step {}", step);
        }
        assert_eq!(calculate_winner(&history[9]), Some(Outcome::Draw));
    }

    #[test]
    fn test_won_game_stops_before_full() {
        let game = play(&[0, 3, 1, 4, 2, 5, 6]);
        assert_eq!(game.history().len(), 6);
        assert!(!is_full(game.current()));
        assert_eq!(game.current().occupied(), 5);
    }

    #[test]
    fn test_jump_back_from_full_board() {
        let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(game.current()));
        game.jump_to(8);
        assert!(!is_full(game.current()));
        assert_eq!(game.history().len(), 10);
    }
}
