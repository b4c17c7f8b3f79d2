//! Command palette overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::palette::PaletteView;
use crate::ui::theme::Theme;

/// Centered popup showing the palette query and its matches.
pub struct PaletteOverlay<'a> {
    view: PaletteView<'a>,
    labels: &'a [&'a str],
    theme: &'a Theme,
}

impl<'a> PaletteOverlay<'a> {
    #[must_use]
    pub const fn new(view: PaletteView<'a>, labels: &'a [&'a str], theme: &'a Theme) -> Self {
        Self {
            view,
            labels,
            theme,
        }
    }

    fn centered_rect(area: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Percentage(15),
            Constraint::Percentage(60),
            Constraint::Percentage(25),
        ])
        .split(area);
        Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1])[1]
    }

    fn query_line(&self) -> Line<'a> {
        let (before, after) = self.view.query.split_at(self.view.query_cursor);
        Line::from(vec![
            Span::styled("> ", self.theme.cursor_style()),
            Span::raw(before),
            Span::styled("│", self.theme.cursor_style()),
            Span::raw(after),
        ])
    }
}

impl Widget for PaletteOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered_rect(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Jump to tool ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);
        Paragraph::new(self.query_line()).render(rows[0], buf);

        if self.view.results.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "  no matching tools",
                self.theme.dimmed_style(),
            )))
            .render(rows[1], buf);
            return;
        }

        let visible = rows[1].height as usize;
        let offset = if visible == 0 || self.view.selected < visible {
            0
        } else {
            self.view.selected + 1 - visible
        };

        let lines: Vec<Line> = self
            .view
            .results
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(pos, item_index)| {
                let label = self.labels.get(*item_index).copied().unwrap_or("?");
                let style = if pos == self.view.selected {
                    self.theme.selected_style()
                } else {
                    self.theme.normal_style()
                };
                let marker = if pos == self.view.selected { "▶ " } else { "  " };
                Line::from(vec![Span::styled(marker, style), Span::styled(label, style)])
            })
            .collect();
        Paragraph::new(lines).render(rows[1], buf);
    }
}
