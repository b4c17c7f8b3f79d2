//! Version-4 UUID generation from the thread-local CSPRNG.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;

/// Panel keeps the most recent generations visible.
const HISTORY: usize = 8;

/// Format 16 bytes as a canonical 8-4-4-4-12 UUID string.
///
/// The version and variant bits must already be set; this is pure
/// formatting.
#[must_use]
pub fn format_uuid(bytes: &[u8; 16]) -> String {
    let hex = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Generate a random version-4 UUID.
#[must_use]
pub fn uuid_v4() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes[..]);
    // RFC 4122: version 4 in the high nibble of byte 6, variant 10 in
    // the top bits of byte 8.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    format_uuid(&bytes)
}

/// UUID generator panel with a short history.
#[derive(Debug, Default)]
pub struct UuidTool {
    history: Vec<String>,
}

impl UuidTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for UuidTool {
    fn id(&self) -> &'static str {
        "uuid"
    }

    fn label(&self) -> &'static str {
        "UUID Generator"
    }

    fn keywords(&self) -> &'static str {
        "uuid guid identifier random v4"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) | (KeyCode::Char('g'), KeyModifiers::ALT) => {
                self.history.insert(0, uuid_v4());
                self.history.truncate(HISTORY);
                ToolEvent::Redraw
            }
            (KeyCode::Char('c'), KeyModifiers::ALT) => {
                self.history.clear();
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => match self.history.first() {
                Some(uuid) => ToolEvent::Copy(uuid.clone()),
                None => ToolEvent::Ignored,
            },
            _ => ToolEvent::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, _focused: bool) {
        let mut lines = Vec::with_capacity(self.history.len() + 2);
        if self.history.is_empty() {
            lines.push(Line::from(Span::styled(
                "press Enter to generate a UUID",
                theme.dimmed_style(),
            )));
        }
        for (i, uuid) in self.history.iter().enumerate() {
            let style = if i == 0 {
                theme.result_style()
            } else {
                theme.dimmed_style()
            };
            lines.push(Line::from(Span::styled(uuid.as_str(), style)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter generate  Alt+c clear  Ctrl+y copy latest",
            theme.dimmed_style(),
        )));
        frame.render_widget(Paragraph::new(lines), area);
    }
}
