//! A single clickable square.

use crate::Theme;
use crate::games::tictactoe::Square;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Boxed button showing `X`, `O` or nothing.
///
/// Purely presentational: clicks on its area are routed by
/// [`GameLayout::hit_test`](crate::GameLayout::hit_test) whether the square
/// is filled or not.
#[derive(Debug, Clone, Copy)]
pub struct SquareButton<'a> {
    square: Square,
    focused: bool,
    winning: bool,
    theme: &'a Theme,
}

impl<'a> SquareButton<'a> {
    /// Creates a button for `square`.
    pub fn new(square: Square, theme: &'a Theme) -> Self {
        Self {
            square,
            focused: false,
            winning: false,
            theme,
        }
    }

    /// Draws the focus border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Highlights the square as part of a completed line.
    pub fn winning(mut self, winning: bool) -> Self {
        self.winning = winning;
        self
    }
}

impl Widget for SquareButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.focus
        } else {
            self.theme.empty
        };
        let block = Block::bordered().border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.winning {
            buf.set_style(inner, Style::default().bg(self.theme.highlight));
        }

        let style = match self.square.player() {
            None => Style::default(),
            Some(player) => Style::default()
                .fg(self.theme.mark_color(player))
                .add_modifier(Modifier::BOLD),
        };

        let middle = Rect::new(
            inner.x,
            inner.y + inner.height / 2,
            inner.width,
            inner.height.min(1),
        );
        Paragraph::new(Line::from(Span::styled(self.square.to_string(), style)))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
