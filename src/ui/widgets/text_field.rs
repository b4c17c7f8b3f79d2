//! Single-line text input shared by the tool panels.
//!
//! State and editing live in [`TextField`]; rendering goes through the
//! borrowed [`TextFieldWidget`] so panels can place the same field in any
//! layout slot.

use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Editable single-line input state.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    text: String,
    /// Byte offset of the cursor within `text`, always on a char boundary.
    cursor: usize,
}

impl TextField {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with text, cursor at the end.
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

    /// Clear the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply a key event to the field.
    ///
    /// Returns true if the event edited or moved within the field.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
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
            (KeyCode::Delete, _) => {
                if self.cursor >= self.text.len() {
                    return false;
                }
                self.text.remove(self.cursor);
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
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Borrow a renderable widget for this field.
    #[must_use]
    pub const fn widget<'a>(
        &'a self,
        title: &'a str,
        theme: &'a Theme,
        focused: bool,
    ) -> TextFieldWidget<'a> {
        TextFieldWidget {
            field: self,
            title,
            theme,
            focused,
        }
    }
}

/// Bordered single-line input with a blinking cursor bar.
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl Widget for TextFieldWidget<'_> {
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

        let mut spans = Vec::new();
        if self.focused {
            let (before, after) = self.field.text.split_at(self.field.cursor);
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.field.text.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut TextField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        for c in "hello".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        assert_eq!(field.text(), "hello");

        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.text(), "hell");
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut field = TextField::with_text("abd");
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Char('c'));
        assert_eq!(field.text(), "abcd");

        press(&mut field, KeyCode::Home);
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.text(), "bcd");

        press(&mut field, KeyCode::End);
        assert!(!press(&mut field, KeyCode::Delete));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = TextField::with_text("stale");
        field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new();
        press(&mut field, KeyCode::Char('é'));
        press(&mut field, KeyCode::Char('x'));
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.text(), "x");
    }

    #[test]
    fn test_unhandled_keys_ignored() {
        let mut field = TextField::new();
        assert!(!press(&mut field, KeyCode::F(5)));
        assert!(!field.handle_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }
}
