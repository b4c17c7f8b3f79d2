//! Minimal multi-line text buffer shared by the text and JSON panels.
//!
//! Supports character insertion, newlines, backspace, and horizontal cursor
//! movement. Tool panels transform the whole buffer at once, so no
//! per-line editing beyond that is needed.

use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Editable multi-line buffer with an end-anchored cursor.
#[derive(Debug, Default, Clone)]
pub struct TextArea {
    text: String,
    /// Byte offset of the cursor, always on a char boundary.
    cursor: usize,
}

impl TextArea {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial contents, cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply a key event. Returns true if the buffer changed or the cursor
    /// moved.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            (KeyCode::Enter, _) => {
                self.text.insert(self.cursor, '\n');
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.text[..self.cursor]
                    .char_indices()
                    .next_back()
                    .map_or(0, |(i, _)| i);
                self.text.remove(prev);
                self.cursor = prev;
                true
            }
            (KeyCode::Left, _) => {
                if self.cursor > 0 {
                    self.cursor = self.text[..self.cursor]
                        .char_indices()
                        .next_back()
                        .map_or(0, |(i, _)| i);
                }
                true
            }
            (KeyCode::Right, _) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map_or(self.text.len(), |(i, _)| self.cursor + i);
                }
                true
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                true
            }
            (KeyCode::End, _) => {
                self.cursor = self.text.len();
                true
            }
            _ => false,
        }
    }

    /// Borrow a renderable widget for this buffer.
    #[must_use]
    pub const fn widget<'a>(
        &'a self,
        title: &'a str,
        theme: &'a Theme,
        focused: bool,
    ) -> TextAreaWidget<'a> {
        TextAreaWidget {
            area: self,
            title,
            theme,
            focused,
        }
    }
}

/// Bordered multi-line paragraph view of a [`TextArea`].
pub struct TextAreaWidget<'a> {
    area: &'a TextArea,
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl Widget for TextAreaWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.area.text.as_str())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(area: &mut TextArea, code: KeyCode) -> bool {
        area.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_newlines_and_typing() {
        let mut area = TextArea::new();
        press(&mut area, KeyCode::Char('a'));
        press(&mut area, KeyCode::Enter);
        press(&mut area, KeyCode::Char('b'));
        assert_eq!(area.text(), "a\nb");
    }

    #[test]
    fn test_backspace_across_newline() {
        let mut area = TextArea::new();
        area.set_text("a\n");
        press(&mut area, KeyCode::Backspace);
        assert_eq!(area.text(), "a");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut area = TextArea::new();
        area.set_text("one");
        press(&mut area, KeyCode::Char('!'));
        assert_eq!(area.text(), "one!");
    }
}
