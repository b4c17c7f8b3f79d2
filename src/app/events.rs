//! Event handling for the TUI.
//!
//! Maps keyboard events to application actions based on the current
//! mode. Global binds win over panel binds; everything unclaimed goes
//! to the active tool.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Mode};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the application
    Exit,
    /// No action taken
    Ignored,
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q' | 'c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            app.open_palette();
            EventResult::Continue
        }
        (KeyCode::F(1), _) => {
            app.toggle_help();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.prev_tool();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.next_tool();
            EventResult::Continue
        }
        _ => {
            app.handle_tool_key(key);
            EventResult::Continue
        }
    }
}

fn handle_palette_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            app.close_palette();
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return EventResult::Exit,
        (KeyCode::Enter, _) => app.confirm_palette(),
        (KeyCode::Up, _) => app.palette.move_selection(-1),
        (KeyCode::Down, _) => app.palette.move_selection(1),
        (KeyCode::Left, _) => app.palette.query_cursor_left(),
        (KeyCode::Right, _) => app.palette.query_cursor_right(),
        (KeyCode::Backspace, _) => {
            let entries = app.entries.clone();
            app.palette.query_backspace(&entries);
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let entries = app.entries.clone();
            app.palette.query_clear(&entries);
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let entries = app.entries.clone();
            app.palette.query_push(c, &entries);
        }
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn handle_help_mode(app: &mut App, key: KeyEvent) -> EventResult {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Exit;
    }
    app.toggle_help();
    EventResult::Continue
}

/// Dispatch a key event based on the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    match app.mode() {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Palette => handle_palette_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(app: &mut App, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolpackConfig;

    fn test_app() -> App {
        let config = ToolpackConfig {
            notes_path: Some(std::env::temp_dir().join("toolpack-events-test-notes.json")),
            ..ToolpackConfig::new_default()
        };
        App::new(&config)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_q_exits() {
        let mut app = test_app();
        let result = handle_normal_mode(&mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_ctrl_k_opens_palette() {
        let mut app = test_app();
        handle_normal_mode(&mut app, key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(app.mode(), Mode::Palette);
    }

    #[test]
    fn test_esc_closes_palette() {
        let mut app = test_app();
        app.open_palette();
        handle_palette_mode(&mut app, key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_palette_typing_filters_and_enter_jumps() {
        let mut app = test_app();
        app.open_palette();
        for c in "hash".chars() {
            handle_palette_mode(&mut app, key(KeyCode::Char(c), KeyModifiers::NONE));
        }
        handle_palette_mode(&mut app, key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.mode(), Mode::Normal);
        assert_eq!(app.labels()[app.selected()], "Hash Text");
    }

    #[test]
    fn test_page_keys_switch_tools() {
        let mut app = test_app();
        handle_normal_mode(&mut app, key(KeyCode::PageDown, KeyModifiers::NONE));
        assert_eq!(app.selected(), 1);
        handle_normal_mode(&mut app, key(KeyCode::PageUp, KeyModifiers::NONE));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = test_app();
        app.toggle_help();
        handle_help_mode(&mut app, key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(app.mode(), Mode::Normal);
    }
}
