//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Every rectangle is a pure function of the root area, the theme and the
//! number of history entries, so a click can be mapped back to the control
//! that was drawn under it without keeping anything from the last frame.

use crate::Theme;
use crate::games::tictactoe::Position;
use ratatui::layout::Rect;
use ratatui::widgets::Block;

use super::action::Action;

/// Gap between the board and the info column.
const GUTTER: u16 = 2;

/// Rows between the status line and the first move entry.
const MOVES_OFFSET: u16 = 2;

/// Returns true if the cell at (`col`, `row`) lies inside `rect`.
fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Placement of the 9 squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Area covered by the grid, clipped to the available space.
    pub area: Rect,
    /// Square rectangles in index order. Squares that do not fit are empty.
    pub squares: [Rect; 9],
}

impl BoardLayout {
    /// Lays out a 3x3 grid anchored at the top-left of `area`.
    pub fn new(area: Rect, theme: &Theme) -> Self {
        let (w, h) = (theme.square_width, theme.square_height);
        let squares = Position::ALL.map(|pos| {
            let x = area.x.saturating_add((pos.col() as u16).saturating_mul(w));
            let y = area.y.saturating_add((pos.row() as u16).saturating_mul(h));
            Rect::new(x, y, w, h).intersection(area)
        });
        let grid = Rect::new(area.x, area.y, w.saturating_mul(3), h.saturating_mul(3)).intersection(area);
        Self { area: grid, squares }
    }

    /// Square under the given cell.
    pub fn square_at(&self, col: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| hit(self.squares[pos.to_index()], col, row))
    }
}

/// Rows of the move list, one per visible entry.
///
/// Entries that would fall below `area` are not laid out.
pub fn move_rows(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map_while(|i| {
            let y = area.y.checked_add(u16::try_from(i).ok()?)?;
            (y < area.bottom() && area.width > 0).then(|| Rect::new(area.x, y, area.width, 1))
        })
        .collect()
}

/// Placement of every control on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLayout {
    /// Root area the whole game is mounted into.
    pub root: Rect,
    /// The board grid.
    pub board: BoardLayout,
    /// Status line.
    pub status: Rect,
    /// Area of the move list.
    pub moves: Rect,
    /// Move entries in step order.
    pub move_rows: Vec<Rect>,
    /// Key help line.
    pub help: Rect,
}

impl GameLayout {
    /// Computes the layout for a root area and history length.
    pub fn new(root: Rect, theme: &Theme, history_len: usize) -> Self {
        let inner = Block::bordered().inner(root);

        let help_y = inner.bottom().saturating_sub(1);
        let help = Rect::new(inner.x, help_y, inner.width, inner.height.min(1));
        let body = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.saturating_sub(1),
        );

        let board_area = Rect::new(
            body.x.saturating_add(1),
            body.y,
            body.width.saturating_sub(1),
            body.height,
        );
        let board = BoardLayout::new(board_area, theme);

        let info_x = board_area
            .x
            .saturating_add(theme.square_width.saturating_mul(3))
            .saturating_add(GUTTER)
            .min(body.right());
        let info = Rect::new(info_x, body.y, body.right() - info_x, body.height);
        let status = Rect::new(info.x, info.y, info.width, info.height.min(1));
        let moves = Rect::new(
            info.x,
            info.y.saturating_add(MOVES_OFFSET).min(info.bottom()),
            info.width,
            info.height.saturating_sub(MOVES_OFFSET),
        );

        Self {
            root,
            board,
            status,
            move_rows: move_rows(moves, history_len),
            moves,
            help,
        }
    }

    /// Maps a left click at (`col`, `row`) to the action of the control under it.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Action> {
        if let Some(pos) = self.board.square_at(col, row) {
            return Some(Action::ClickSquare(pos));
        }
        self.move_rows
            .iter()
            .position(|rect| hit(*rect, col, row))
            .map(Action::JumpTo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_every_square_hits_its_own_index() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), &Theme::default(), 1);
        for pos in Position::ALL {
            let (col, row) = center(layout.board.squares[pos.to_index()]);
            assert_eq!(layout.hit_test(col, row), Some(Action::ClickSquare(pos)));
        }
    }

    #[test]
    fn test_squares_grouped_in_rows() {
        let theme = Theme::default();
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), &theme, 1);
        let squares = &layout.board.squares;
        assert_eq!(squares[0].y, squares[2].y);
        assert_eq!(squares[3].y, squares[0].y + theme.square_height);
        assert_eq!(squares[1].x, squares[0].x + theme.square_width);
    }

    #[test]
    fn test_move_rows_hit_jump() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), &Theme::default(), 3);
        assert_eq!(layout.move_rows.len(), 3);
        let (col, row) = center(layout.move_rows[2]);
        assert_eq!(layout.hit_test(col, row), Some(Action::JumpTo(2)));
    }

    #[test]
    fn test_border_is_not_clickable() {
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), &Theme::default(), 1);
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_move_rows_clip_to_area() {
        let rows = move_rows(Rect::new(0, 0, 10, 2), 5);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_tiny_root_does_not_panic() {
        let layout = GameLayout::new(Rect::new(0, 0, 3, 2), &Theme::default(), 4);
        assert!(layout.move_rows.is_empty());
        assert_eq!(layout.hit_test(1, 1), None);
    }
}
