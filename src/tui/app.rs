//! Application state and logic.

use crate::Theme;
use crate::games::tictactoe::{ClickOutcome, Game, GameView, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::action::Action;
use super::layout::GameLayout;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move across the board.
    #[default]
    Board,
    /// Arrow keys walk the move list.
    Moves,
}

impl Focus {
    /// The other focus target.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Wraps the [`Game`] with the presentation state that only exists in the
/// terminal host: the board cursor, focus and move list selection.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    theme: Theme,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(theme))]
    pub fn new(theme: Theme) -> Self {
        Self {
            game: Game::new(),
            theme,
            cursor: Position::Center,
            focus: Focus::default(),
            selected_move: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the theme used for rendering.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move list entry under the keyboard selection.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derives the render model for the current step.
    pub fn view(&self) -> GameView {
        GameView::new(&self.game)
    }

    /// Layout of the game mounted into `root`.
    pub fn layout(&self, root: Rect) -> GameLayout {
        GameLayout::new(root, &self.theme, self.game.history().len())
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ClickSquare(pos) => {
                self.cursor = pos;
                match self.game.handle_click(pos) {
                    ClickOutcome::Placed(player) => {
                        self.selected_move = self.game.step_number();
                        debug!(%player, "Square claimed");
                    }
                    ClickOutcome::Ignored(reason) => debug!(%reason, "Click had no effect"),
                }
            }
            Action::JumpTo(step) => {
                if self.game.jump_to(step) {
                    self.selected_move = step;
                }
            }
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::SelectMove(step) => {
                self.selected_move = step.min(self.game.history().len() - 1);
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected_move = self.game.step_number();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
