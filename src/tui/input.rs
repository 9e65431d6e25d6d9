//! Translates terminal events into [`Action`]s.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{instrument, trace};

use super::action::Action;
use super::app::{App, Focus};
use super::layout::GameLayout;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key press to an action given the current focus.
#[instrument(skip(app), fields(focus = ?app.focus()))]
pub fn key_action(key: KeyEvent, app: &App) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let game = app.game();
    let step = game.step_number();
    let last_step = game.history().len() - 1;

    let action = match (key.code, app.focus()) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::ToggleFocus),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::ClickSquare),
        (KeyCode::Char('['), _) => step.checked_sub(1).map(Action::JumpTo),
        (KeyCode::Char(']'), _) => (step < last_step).then(|| Action::JumpTo(step + 1)),

        (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down, Focus::Board) => {
            Some(Action::MoveCursor(move_cursor(app.cursor(), key.code)))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
            Some(Action::ClickSquare(app.cursor()))
        }

        (KeyCode::Up, Focus::Moves) => Some(Action::SelectMove(app.selected_move().saturating_sub(1))),
        (KeyCode::Down, Focus::Moves) => {
            Some(Action::SelectMove((app.selected_move() + 1).min(last_step)))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => {
            Some(Action::JumpTo(app.selected_move()))
        }
        _ => None,
    };

    trace!(?action, "Key mapped");
    action
}

/// Maps a mouse event to an action using the layout of the last frame's area.
#[instrument(skip(layout))]
pub fn mouse_action(mouse: MouseEvent, layout: &GameLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.hit_test(mouse.column, mouse.row),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
    }

    #[test]
    fn test_digit_clicks_square() {
        let app = App::default();
        assert_eq!(
            key_action(press(KeyCode::Char('1')), &app),
            Some(Action::ClickSquare(Position::TopLeft))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('9')), &app),
            Some(Action::ClickSquare(Position::BottomRight))
        );
        assert_eq!(key_action(press(KeyCode::Char('0')), &app), None);
    }

    #[test]
    fn test_step_keys_respect_bounds() {
        let mut app = App::default();
        assert_eq!(key_action(press(KeyCode::Char('[')), &app), None);
        assert_eq!(key_action(press(KeyCode::Char(']')), &app), None);

        app.dispatch(Action::ClickSquare(Position::Center));
        assert_eq!(key_action(press(KeyCode::Char('[')), &app), Some(Action::JumpTo(0)));
        assert_eq!(key_action(press(KeyCode::Char(']')), &app), None);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let mut app = App::default();
        assert_eq!(
            key_action(press(KeyCode::Enter), &app),
            Some(Action::ClickSquare(Position::Center))
        );
        app.dispatch(Action::ToggleFocus);
        assert_eq!(key_action(press(KeyCode::Enter), &app), Some(Action::JumpTo(0)));
    }

    #[test]
    fn test_release_is_ignored() {
        let app = App::default();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key, &app), None);
    }
}
