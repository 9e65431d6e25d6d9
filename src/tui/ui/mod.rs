//! UI rendering using ratatui.
//!
//! Rendering is a pure function of [`App`]: the same state always draws the
//! same frame.

mod board;
mod moves;
mod square;

pub use board::BoardGrid;
pub use moves::MoveList;
pub use square::SquareButton;

use super::app::{App, Focus};
use crate::games::tictactoe::{GameView, Outcome};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};

/// Title of the root block.
pub const TITLE: &str = " Tic-Tac-Toe ";

/// Draws the main UI into the whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    frame.render_widget(GameScreen::new(app), frame.area());
}

/// The game component: board, status and move list.
#[derive(Debug)]
pub struct GameScreen<'a> {
    app: &'a App,
    view: GameView,
}

impl<'a> GameScreen<'a> {
    /// Derives the screen for the app's current state.
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            view: app.view(),
        }
    }
}

impl Widget for GameScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.app;
        let theme = app.theme();
        let layout = app.layout(area);

        Block::bordered()
            .title(TITLE)
            .border_style(Style::default().fg(theme.empty))
            .render(layout.root, buf);

        let board_focused = app.focus() == Focus::Board;
        BoardGrid::new(&self.view.board, theme)
            .cursor(board_focused.then(|| app.cursor()))
            .winning_line(self.view.winning_line)
            .render(layout.board.area, buf);

        let status_style = match self.view.outcome {
            Some(Outcome::Winner(player)) => Style::default()
                .fg(theme.mark_color(player))
                .add_modifier(Modifier::BOLD),
            Some(Outcome::Draw) => Style::default().add_modifier(Modifier::BOLD),
            None => Style::default().fg(theme.mark_color(app.game().next_player())),
        };
        Paragraph::new(self.view.status.as_str())
            .style(status_style)
            .render(layout.status, buf);

        MoveList::new(&self.view.moves, theme)
            .selected((!board_focused).then(|| app.selected_move()))
            .render(layout.moves, buf);

        let help = match app.focus() {
            Focus::Board => "Click/1-9/Enter: move | Tab: history | [ ]: step | q: quit",
            Focus::Moves => "Click/Enter: jump | Tab: board | [ ]: step | q: quit",
        };
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(layout.help, buf);
    }
}
