//! Text utilities: counts and whole-buffer transforms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::TextArea;

/// Word, character, and line counts for a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
}

/// Count words (whitespace-separated runs), characters, and lines.
///
/// An empty buffer still has one line, matching how editors count.
#[must_use]
pub fn stats(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
        lines: text.split('\n').count(),
    }
}

/// Collapse runs of spaces/tabs to one space, strip trailing blanks from
/// line ends, and trim the whole buffer.
#[must_use]
pub fn squeeze_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        match c {
            ' ' | '\t' => pending_space = true,
            '\n' => {
                // Drop trailing blanks before the newline.
                pending_space = false;
                out.push('\n');
            }
            other => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(other);
            }
        }
    }
    out.trim().to_string()
}

/// Title Case: uppercase the first letter of every word, lowercase
/// the rest.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Reverse the order of lines.
#[must_use]
pub fn reverse_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.reverse();
    lines.join("\n")
}

/// Text utilities panel.
#[derive(Debug, Default)]
pub struct TextTool {
    buffer: TextArea,
}

impl TextTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for TextTool {
    fn id(&self) -> &'static str {
        "text"
    }

    fn label(&self) -> &'static str {
        "Text Utilities"
    }

    fn keywords(&self) -> &'static str {
        "text case count words characters lines trim reverse"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::ALT) => {
                self.buffer.set_text(self.buffer.text().to_uppercase());
                ToolEvent::Redraw
            }
            (KeyCode::Char('l'), KeyModifiers::ALT) => {
                self.buffer.set_text(self.buffer.text().to_lowercase());
                ToolEvent::Redraw
            }
            (KeyCode::Char('c'), KeyModifiers::ALT) => {
                self.buffer.set_text(title_case(self.buffer.text()));
                ToolEvent::Redraw
            }
            (KeyCode::Char('t'), KeyModifiers::ALT) => {
                self.buffer.set_text(squeeze_whitespace(self.buffer.text()));
                ToolEvent::Redraw
            }
            (KeyCode::Char('r'), KeyModifiers::ALT) => {
                self.buffer.set_text(reverse_lines(self.buffer.text()));
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

        frame.render_widget(self.buffer.widget("Text", theme, focused), rows[0]);

        let counts = stats(self.buffer.text());
        let line = Line::from(Span::styled(
            format!(
                "Words: {} • Characters: {} • Lines: {}",
                counts.words, counts.chars, counts.lines
            ),
            theme.result_style(),
        ));
        frame.render_widget(Paragraph::new(line), rows[1]);

        let hint = Line::from(Span::styled(
            "Alt+u UPPER  Alt+l lower  Alt+c Title  Alt+t trim  Alt+r reverse  Ctrl+y copy",
            theme.dimmed_style(),
        ));
        frame.render_widget(Paragraph::new(hint), rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let counts = stats("one two\nthree");
        assert_eq!(counts.words, 3);
        assert_eq!(counts.chars, 13);
        assert_eq!(counts.lines, 2);
    }

    #[test]
    fn test_stats_empty() {
        let counts = stats("");
        assert_eq!(counts.words, 0);
        assert_eq!(counts.chars, 0);
        assert_eq!(counts.lines, 1);
    }

    #[test]
    fn test_squeeze_whitespace() {
        assert_eq!(squeeze_whitespace("a   b\t\tc"), "a b c");
        assert_eq!(squeeze_whitespace("line one   \nline two"), "line one\nline two");
        assert_eq!(squeeze_whitespace("  padded  "), "padded");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello WORLD"), "Hello World");
        assert_eq!(title_case("one\ntwo three"), "One\nTwo Three");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_reverse_lines() {
        assert_eq!(reverse_lines("a\nb\nc"), "c\nb\na");
        assert_eq!(reverse_lines("single"), "single");
    }
}
