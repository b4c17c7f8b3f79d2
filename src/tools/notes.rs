//! Persistent notes scratchpad.
//!
//! Edits autosave after a short quiet period rather than on every
//! keystroke. The panel edits the first note in the store and leaves
//! any others untouched.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::{load_notes, save_notes, NoteRecord};
use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::{TextArea, TextField};
use crate::ui::MessageLevel;

/// Quiet period before a dirty buffer is flushed to disk.
const SAVE_DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesField {
    Title,
    Content,
}

/// Notes panel with debounced autosave.
#[derive(Debug)]
pub struct NotesTool {
    path: PathBuf,
    title: TextField,
    content: TextArea,
    rest: Vec<NoteRecord>,
    active: NotesField,
    dirty_since: Option<Instant>,
    saved_at: Option<DateTime<Local>>,
    error: Option<String>,
}

impl NotesTool {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let (title, content, rest, saved_at, error) = match load_notes(&path) {
            Ok(mut notes) => {
                if notes.is_empty() {
                    (TextField::new(), TextArea::new(), Vec::new(), None, None)
                } else {
                    let first = notes.remove(0);
                    (
                        TextField::with_text(first.title),
                        TextArea::with_text(first.content),
                        notes,
                        Some(first.saved_at),
                        None,
                    )
                }
            }
            Err(e) => (
                TextField::new(),
                TextArea::new(),
                Vec::new(),
                None,
                Some(e.to_string()),
            ),
        };
        Self {
            path,
            title,
            content,
            rest,
            active: NotesField::Content,
            dirty_since: None,
            saved_at,
            error,
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty_since = Some(Instant::now());
    }

    fn flush(&mut self) -> ToolEvent {
        self.dirty_since = None;
        let record = NoteRecord::new(self.title.text(), self.content.text());
        let saved_at = record.saved_at;
        let mut notes = vec![record];
        notes.extend(self.rest.iter().cloned());
        match save_notes(&self.path, &notes) {
            Ok(()) => {
                self.saved_at = Some(saved_at);
                self.error = None;
                ToolEvent::Redraw
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                ToolEvent::Status(MessageLevel::Error, message)
            }
        }
    }
}

impl Tool for NotesTool {
    fn id(&self) -> &'static str {
        "notes"
    }

    fn label(&self) -> &'static str {
        "Notes"
    }

    fn keywords(&self) -> &'static str {
        "notes scratchpad write save text memo"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => {
                self.active = match self.active {
                    NotesField::Title => NotesField::Content,
                    NotesField::Content => NotesField::Title,
                };
                ToolEvent::Redraw
            }
            (KeyCode::Char('s'), KeyModifiers::ALT) => self.flush(),
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                ToolEvent::Copy(self.content.text().to_string())
            }
            _ => {
                let changed = match self.active {
                    NotesField::Title => self.title.handle_key(key),
                    NotesField::Content => self.content.handle_key(key),
                };
                if changed {
                    self.mark_dirty();
                    ToolEvent::Redraw
                } else {
                    ToolEvent::Ignored
                }
            }
        }
    }

    fn tick(&mut self) -> ToolEvent {
        match self.dirty_since {
            Some(since) if since.elapsed() >= SAVE_DEBOUNCE => self.flush(),
            _ => ToolEvent::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            self.title
                .widget("Title", theme, focused && self.active == NotesField::Title),
            rows[0],
        );
        frame.render_widget(
            self.content
                .widget("Note", theme, focused && self.active == NotesField::Content),
            rows[1],
        );

        let status = if let Some(error) = &self.error {
            Span::styled(error.as_str(), theme.error_style())
        } else if self.dirty_since.is_some() {
            Span::styled("unsaved changes...", theme.warning_style())
        } else if let Some(saved) = self.saved_at {
            Span::styled(
                format!("saved {}", saved.format("%Y-%m-%d %H:%M:%S")),
                theme.dimmed_style(),
            )
        } else {
            Span::styled("Tab switch field  Alt+s save now", theme.dimmed_style())
        };
        frame.render_widget(Paragraph::new(Line::from(status)), rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_marks_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut tool = NotesTool::new(dir.path().join("notes.json"));
        assert!(tool.dirty_since.is_none());
        tool.handle_key(key('h'));
        assert!(tool.dirty_since.is_some());
    }

    #[test]
    fn test_manual_save_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut tool = NotesTool::new(path.clone());
        for c in "hi".chars() {
            tool.handle_key(key(c));
        }
        tool.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));

        let notes = load_notes(&path).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "hi");
        assert!(tool.dirty_since.is_none());
    }

    #[test]
    fn test_reopen_restores_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        save_notes(&path, &[NoteRecord::new("shopping", "milk")]).unwrap();

        let tool = NotesTool::new(path);
        assert_eq!(tool.title.text(), "shopping");
        assert_eq!(tool.content.text(), "milk");
    }

    #[test]
    fn test_debounce_waits() {
        let dir = tempfile::tempdir().unwrap();
        let mut tool = NotesTool::new(dir.path().join("notes.json"));
        tool.handle_key(key('x'));
        // Immediately after a keystroke the debounce window is open.
        assert!(matches!(tool.tick(), ToolEvent::Ignored));
        tool.dirty_since = Some(Instant::now() - SAVE_DEBOUNCE);
        assert!(matches!(tool.tick(), ToolEvent::Redraw));
    }

    #[test]
    fn test_extra_notes_survive_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        save_notes(
            &path,
            &[NoteRecord::new("first", "a"), NoteRecord::new("second", "b")],
        )
        .unwrap();

        let mut tool = NotesTool::new(path.clone());
        tool.handle_key(key('!'));
        tool.flush();

        let notes = load_notes(&path).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title, "second");
    }
}
