//! Sidebar listing every tool panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Vertical tool list with a selection marker.
///
/// The selected entry is always scrolled into view; an entry the
/// palette just jumped to gets the flash style until its timer runs
/// out.
pub struct Sidebar<'a> {
    labels: &'a [&'a str],
    selected: usize,
    flash: Option<usize>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    #[must_use]
    pub const fn new(
        labels: &'a [&'a str],
        selected: usize,
        flash: Option<usize>,
        theme: &'a Theme,
        focused: bool,
    ) -> Self {
        Self {
            labels,
            selected,
            flash,
            theme,
            focused,
        }
    }

    /// First visible row, keeping `selected` on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Tools ");
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);

        let lines: Vec<Line> = self
            .labels
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, label)| {
                let (marker, style) = if self.flash == Some(i) {
                    ("▶ ", self.theme.highlight_style())
                } else if i == self.selected {
                    ("▶ ", self.theme.selected_style())
                } else {
                    ("  ", self.theme.normal_style())
                };
                Line::from(vec![Span::styled(marker, style), Span::styled(*label, style)])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
