//! Tic-tac-toe board rendering.

use crate::Theme;
use crate::games::tictactoe::{Board, Position};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::super::layout::BoardLayout;
use super::square::SquareButton;

/// 3x3 grid of [`SquareButton`]s for one board snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoardGrid<'a> {
    board: &'a Board,
    cursor: Option<Position>,
    winning_line: Option<[Position; 3]>,
    theme: &'a Theme,
}

impl<'a> BoardGrid<'a> {
    /// Creates a grid for `board`.
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self {
            board,
            cursor: None,
            winning_line: None,
            theme,
        }
    }

    /// Square drawn with the focus border.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Squares drawn highlighted.
    pub fn winning_line(mut self, line: Option<[Position; 3]>) -> Self {
        self.winning_line = line;
        self
    }
}

impl Widget for BoardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = BoardLayout::new(area, self.theme);
        for pos in Position::ALL {
            let rect = layout.squares[pos.to_index()];
            if rect.is_empty() {
                continue;
            }
            let winning = self.winning_line.is_some_and(|line| line.contains(&pos));
            SquareButton::new(self.board.get(pos), self.theme)
                .focused(self.cursor == Some(pos))
                .winning(winning)
                .render(rect, buf);
        }
    }
}
