//! Help overlay widget for the full keybind reference.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Centered overlay describing every keybind.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn help_line(key: &'static str, action: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!("{key:<14}")),
            Span::raw(action),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let section = |title: &'static str| {
            Line::styled(
                format!("  {title}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            )
        };
        let mut lines = vec![
            Line::default(),
            section("Global"),
            Line::default(),
            Self::help_line("  Ctrl+K", "Open command palette"),
            Self::help_line("  PgUp/PgDn", "Previous / next tool"),
            Self::help_line("  F1", "Toggle this help"),
            Self::help_line("  Ctrl+Q", "Quit"),
            Line::default(),
            section("Palette"),
            Line::default(),
            Self::help_line("  Type", "Filter tools"),
            Self::help_line("  ↑/↓", "Move selection"),
            Self::help_line("  Enter", "Jump to tool"),
            Self::help_line("  ESC", "Close palette"),
            Self::help_line("  Ctrl+U", "Clear query"),
            Line::default(),
            section("Panels"),
            Line::default(),
            Self::help_line("  Enter", "Run the panel's main action"),
            Self::help_line("  Ctrl+Y", "Copy result to clipboard"),
            Self::help_line("  Alt+letter", "Panel-specific actions (see hints)"),
            Self::help_line("  Tab", "Next field within a panel"),
        ];
        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered_rect(50, 70, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(self.build_content()).render(inner, buf);
    }
}
