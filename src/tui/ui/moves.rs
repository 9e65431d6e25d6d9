//! Move list: one jump button per history snapshot.

use crate::Theme;
use crate::games::tictactoe::MoveEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::super::layout::move_rows;

/// Ordered list of history entries.
#[derive(Debug, Clone, Copy)]
pub struct MoveList<'a> {
    entries: &'a [MoveEntry],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> MoveList<'a> {
    /// Creates a list of `entries`.
    pub fn new(entries: &'a [MoveEntry], theme: &'a Theme) -> Self {
        Self {
            entries,
            selected: None,
            theme,
        }
    }

    /// Entry drawn with the focus color.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for MoveList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = move_rows(area, self.entries.len());
        for (entry, row) in self.entries.iter().zip(rows) {
            let mut style = Style::default();
            if entry.current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if self.selected == Some(entry.step) {
                style = style.fg(self.theme.focus);
            }
            let line = Line::from(vec![
                Span::raw(format!("{:>2}. ", entry.step + 1)),
                Span::styled(format!("[ {} ]", entry.label), style),
            ]);
            line.render(row, buf);
        }
    }
}
