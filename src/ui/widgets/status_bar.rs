//! Status bar widget for transient messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::StatusMessage;
use crate::ui::output::MessageLevel;
use crate::ui::theme::Theme;

/// Single-line bar showing the most recent unexpired messages.
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }

    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = self.style_for_level(message.level);
            spans.push(Span::styled(Self::prefix_for_level(message.level), style));
            spans.push(Span::styled(message.text.as_str(), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
