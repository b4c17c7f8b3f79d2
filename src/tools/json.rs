//! JSON formatter, minifier, and validator.

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
use crate::ui::widgets::TextArea;

/// Errors from JSON processing.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pretty-print JSON with two-space indentation.
///
/// # Errors
///
/// Returns `JsonError::Parse` if the input is not valid JSON.
pub fn format_json(text: &str) -> Result<String, JsonError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Collapse JSON to its most compact form.
///
/// # Errors
///
/// Returns `JsonError::Parse` if the input is not valid JSON.
pub fn minify_json(text: &str) -> Result<String, JsonError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}

/// Check whether the input parses, reporting the parser's position on failure.
///
/// # Errors
///
/// Returns `JsonError::Parse` carrying line and column details.
pub fn validate_json(text: &str) -> Result<(), JsonError> {
    serde_json::from_str::<serde_json::Value>(text)?;
    Ok(())
}

/// JSON editing panel with format, minify, and validate actions.
#[derive(Debug, Default)]
pub struct JsonTool {
    buffer: TextArea,
    status: String,
}

impl JsonTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(&mut self, result: Result<String, JsonError>) {
        match result {
            Ok(text) => {
                self.buffer.set_text(text);
                self.status = "ok".to_string();
            }
            Err(e) => self.status = e.to_string(),
        }
    }
}

impl Tool for JsonTool {
    fn id(&self) -> &'static str {
        "json"
    }

    fn label(&self) -> &'static str {
        "JSON Formatter"
    }

    fn keywords(&self) -> &'static str {
        "json format pretty minify validate lint"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Char('f'), KeyModifiers::ALT) => {
                self.apply(format_json(self.buffer.text()));
                ToolEvent::Redraw
            }
            (KeyCode::Char('m'), KeyModifiers::ALT) => {
                self.apply(minify_json(self.buffer.text()));
                ToolEvent::Redraw
            }
            (KeyCode::Char('v'), KeyModifiers::ALT) => {
                self.status = match validate_json(self.buffer.text()) {
                    Ok(()) => "valid JSON".to_string(),
                    Err(e) => e.to_string(),
                };
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                ToolEvent::Copy(self.buffer.text().to_string())
            }
            _ => {
                if self.buffer.handle_key(key) {
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
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(self.buffer.widget("JSON", theme, focused), rows[0]);

        if !self.status.is_empty() {
            let style = if self.status.starts_with("invalid") {
                theme.error_style()
            } else {
                theme.success_style()
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(self.status.as_str(), style))),
                rows[1],
            );
        }

        let hint = Line::from(Span::styled(
            "Alt+f format  Alt+m minify  Alt+v validate  Ctrl+y copy",
            theme.dimmed_style(),
        ));
        frame.render_widget(Paragraph::new(hint), rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json() {
        let out = format_json(r#"{"a":1,"b":[2,3]}"#).unwrap();
        assert!(out.contains("  \"a\": 1"));
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_minify_json() {
        let out = minify_json("{\n  \"a\": 1,\n  \"b\": [2, 3]\n}").unwrap();
        assert_eq!(out, r#"{"a":1,"b":[2,3]}"#);
    }

    #[test]
    fn test_validate_json_ok() {
        assert!(validate_json(r#"[1, 2, {"x": null}]"#).is_ok());
    }

    #[test]
    fn test_validate_json_reports_position() {
        let err = validate_json("{\"a\": }").unwrap_err();
        assert!(err.to_string().contains("column"));
    }

    #[test]
    fn test_format_rejects_garbage() {
        assert!(format_json("not json").is_err());
    }
}
