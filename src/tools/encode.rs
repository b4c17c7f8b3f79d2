//! Base64 and URL encoders/decoders.
//!
//! Both panels share the same shape: one input line, encode/decode actions,
//! and a copyable output. Encoding is UTF-8 safe in both directions.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use thiserror::Error;

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::TextField;

/// Errors from encoding and decoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input is not valid base64
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decoded bytes are not valid UTF-8
    #[error("decoded data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Input is not a valid percent-encoded string
    #[error("invalid percent encoding")]
    Percent,
}

/// Base64-encode a UTF-8 string (standard alphabet, padded).
#[must_use]
pub fn b64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 back to a UTF-8 string.
///
/// # Errors
///
/// Returns `EncodeError` on malformed base64 or non-UTF-8 payloads.
pub fn b64_decode(text: &str) -> Result<String, EncodeError> {
    let bytes = STANDARD.decode(text.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Percent-encode a string for use in a URL component.
#[must_use]
pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode a percent-encoded string.
///
/// # Errors
///
/// Returns `EncodeError::Percent` if the encoding is malformed.
pub fn url_decode(text: &str) -> Result<String, EncodeError> {
    urlencoding::decode(text)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| EncodeError::Percent)
}

/// Shared input/output panel used by both encoder tools.
#[derive(Debug, Default)]
struct TranscoderPanel {
    input: TextField,
    output: String,
}

impl TranscoderPanel {
    fn handle_key(
        &mut self,
        key: KeyEvent,
        encode: impl Fn(&str) -> String,
        decode: impl Fn(&str) -> Result<String, EncodeError>,
    ) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Char('e'), KeyModifiers::ALT) | (KeyCode::Enter, _) => {
                self.output = encode(self.input.text());
                ToolEvent::Redraw
            }
            (KeyCode::Char('d'), KeyModifiers::ALT) => {
                self.output = match decode(self.input.text()) {
                    Ok(text) => text,
                    Err(e) => format!("Error: {e}"),
                };
                ToolEvent::Redraw
            }
            (KeyCode::Char('c'), KeyModifiers::ALT) => {
                self.input.clear();
                self.output.clear();
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

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool, title: &str) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(self.input.widget(title, theme, focused), rows[0]);

        let output = Line::from(vec![
            Span::styled("→ ", theme.dimmed_style()),
            Span::styled(
                if self.output.is_empty() { "—" } else { &self.output },
                theme.result_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(output), rows[1]);

        let hint = Line::from(Span::styled(
            "Alt+e encode  Alt+d decode  Alt+c clear  Ctrl+y copy",
            theme.dimmed_style(),
        ));
        frame.render_widget(Paragraph::new(hint), rows[2]);
    }
}

/// Base64 encode/decode panel.
#[derive(Debug, Default)]
pub struct Base64Tool {
    panel: TranscoderPanel,
}

impl Base64Tool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for Base64Tool {
    fn id(&self) -> &'static str {
        "base64"
    }

    fn label(&self) -> &'static str {
        "Base64 Encode/Decode"
    }

    fn keywords(&self) -> &'static str {
        "base64 encode decode binary text"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        self.panel.handle_key(key, b64_encode, b64_decode)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        self.panel.render(frame, area, theme, focused, "Base64 input");
    }
}

/// URL encode/decode panel.
#[derive(Debug, Default)]
pub struct UrlTool {
    panel: TranscoderPanel,
}

impl UrlTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for UrlTool {
    fn id(&self) -> &'static str {
        "url"
    }

    fn label(&self) -> &'static str {
        "URL Encode/Decode"
    }

    fn keywords(&self) -> &'static str {
        "url percent encode decode escape uri"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        self.panel.handle_key(key, url_encode, url_decode)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        self.panel.render(frame, area, theme, focused, "URL input");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b64_encode() {
        assert_eq!(b64_encode("hello"), "aGVsbG8=");
        assert_eq!(b64_encode(""), "");
    }

    #[test]
    fn test_b64_decode() {
        assert_eq!(b64_decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_b64_utf8_safe() {
        let text = "héllo wörld ✓";
        assert_eq!(b64_decode(&b64_encode(text)).unwrap(), text);
    }

    #[test]
    fn test_b64_decode_invalid() {
        assert!(b64_decode("not base64!!!").is_err());
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("a%20b%26c").unwrap(), "a b&c");
    }

    #[test]
    fn test_url_decode_invalid_utf8() {
        assert!(url_decode("%FF").is_err());
    }
}
