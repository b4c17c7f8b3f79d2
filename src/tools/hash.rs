//! SHA-2 digests of text input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use sha2::{Digest, Sha256, Sha512};

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::TextField;

/// Hex-encoded SHA-256 digest of the input text.
#[must_use]
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Hex-encoded SHA-512 digest of the input text.
#[must_use]
pub fn sha512_hex(text: &str) -> String {
    hex::encode(Sha512::digest(text.as_bytes()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    #[must_use]
    pub fn digest_hex(self, text: &str) -> String {
        match self {
            Self::Sha256 => sha256_hex(text),
            Self::Sha512 => sha512_hex(text),
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::Sha256 => Self::Sha512,
            Self::Sha512 => Self::Sha256,
        }
    }
}

/// Text hashing panel.
#[derive(Debug, Default)]
pub struct HashTool {
    input: TextField,
    algorithm: HashAlgorithm,
    output: String,
}

impl HashTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for HashTool {
    fn id(&self) -> &'static str {
        "hash"
    }

    fn label(&self) -> &'static str {
        "Hash Text"
    }

    fn keywords(&self) -> &'static str {
        "hash sha256 sha512 digest checksum"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.output = self.algorithm.digest_hex(self.input.text());
                ToolEvent::Redraw
            }
            (KeyCode::Char('a'), KeyModifiers::ALT) => {
                self.algorithm = self.algorithm.toggle();
                if !self.output.is_empty() {
                    self.output = self.algorithm.digest_hex(self.input.text());
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => ToolEvent::Copy(self.output.clone()),
            _ => {
                if self.input.handle_key(key) {
                    ToolEvent::Redraw
                } else {
                    ToolEvent::Ignored
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(self.input.widget("Text", theme, focused), rows[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Algorithm: "),
                Span::styled(self.algorithm.name(), theme.result_style()),
            ])),
            rows[1],
        );

        let digest = if self.output.is_empty() {
            Line::from(Span::styled("press Enter to hash", theme.dimmed_style()))
        } else {
            Line::from(Span::styled(self.output.as_str(), theme.result_style()))
        };
        frame.render_widget(
            Paragraph::new(digest).wrap(Wrap { trim: false }),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Enter hash  Alt+a algorithm  Ctrl+y copy",
                theme.dimmed_style(),
            ))),
            rows[3],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha512_length() {
        assert_eq!(sha512_hex("abc").len(), 128);
    }

    #[test]
    fn test_algorithm_toggle() {
        assert_eq!(HashAlgorithm::Sha256.toggle(), HashAlgorithm::Sha512);
        assert_eq!(HashAlgorithm::Sha512.toggle(), HashAlgorithm::Sha256);
    }
}
