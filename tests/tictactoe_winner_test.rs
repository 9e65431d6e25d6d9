//! Exhaustive checks of `calculate_winner` over every 3x3 board.

use rewind_tictactoe::{Board, Outcome, Player, Square, calculate_winner};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every assignment of empty/X/O to the 9 squares.
fn all_boards() -> impl Iterator<Item = [Square; 9]> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        squares
    })
}

fn has_line(squares: &[Square; 9], player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
}

#[test]
fn test_open_boards_have_no_result() {
    for squares in all_boards() {
        let occupied = squares.iter().filter(|s| !s.is_empty()).count();
        if occupied < 9 && !has_line(&squares, Player::X) && !has_line(&squares, Player::O) {
            assert_eq!(calculate_winner(&Board::from_squares(squares)), None);
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let mut draws = 0;
    for squares in all_boards() {
        let occupied = squares.iter().filter(|s| !s.is_empty()).count();
        if occupied == 9 && !has_line(&squares, Player::X) && !has_line(&squares, Player::O) {
            assert_eq!(calculate_winner(&Board::from_squares(squares)), Some(Outcome::Draw));
            draws += 1;
        }
    }
    assert!(draws > 0);
}

#[test]
fn test_single_owner_lines_win() {
    for squares in all_boards() {
        let board = Board::from_squares(squares);
        match (has_line(&squares, Player::X), has_line(&squares, Player::O)) {
            (true, false) => assert_eq!(calculate_winner(&board), Some(Outcome::Winner(Player::X))),
            (false, true) => assert_eq!(calculate_winner(&board), Some(Outcome::Winner(Player::O))),
            _ => {}
        }
    }
}

#[test]
fn test_draw_pattern() {
    use Player::{O, X};
    // X O X / O X O / O X O
    let squares = [X, O, X, O, X, O, O, X, O].map(Square::Occupied);
    assert_eq!(calculate_winner(&Board::from_squares(squares)), Some(Outcome::Draw));
}
