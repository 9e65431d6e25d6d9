//! Terminal host for the game.
//!
//! The component tree is mounted into the root area of the terminal frame.
//! Each input event becomes at most one [`Action`], is applied to the
//! [`App`], and the whole screen is drawn again from the new state.

mod action;
mod app;
mod input;
mod layout;
mod ui;

pub use action::Action;
pub use app::{App, Focus};
pub use input::{key_action, mouse_action, move_cursor};
pub use layout::{BoardLayout, GameLayout};
pub use ui::{BoardGrid, GameScreen, MoveList, SquareButton, draw};

use crate::Theme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the game in the current terminal until the user quits.
#[instrument(skip(theme))]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(theme);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.game().history().len() - 1,
        "Terminal UI closed"
    );
    res
}

/// Draw, wait for one event, apply it.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut root = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            root = frame.area();
            draw(frame, app);
        })?;

        let action = match event::read()? {
            Event::Key(key) => key_action(key, app),
            Event::Mouse(mouse) => mouse_action(mouse, &app.layout(root)),
            other => {
                debug!(event = ?other, "Unhandled event");
                None
            }
        };

        if let Some(action) = action {
            app.dispatch(action);
        }
    }

    Ok(())
}
