//! The TUI application: a sidebar of tool panels, a command palette
//! overlay, and the event loop that drives them.

mod events;
mod nav;

pub use events::{handle_key, poll_and_handle, EventResult};

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use thiserror::Error;

use crate::clipboard;
use crate::config::ToolpackConfig;
use crate::palette::{Palette, ToolEntry};
use crate::tools::{index_entries, registry, Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::{HelpBar, HelpOverlay, PaletteOverlay, Sidebar, StatusBar};
use crate::ui::MessageLevel;

/// How long a palette jump keeps its sidebar entry highlighted.
const FLASH_TTL: Duration = Duration::from_millis(1200);

/// How long status messages stay visible.
const MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Event loop poll interval.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors from running the TUI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys go to the active tool panel
    #[default]
    Normal,
    /// Palette overlay is capturing input
    Palette,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Top-level application state.
pub struct App {
    tools: Vec<Box<dyn Tool>>,
    entries: Vec<ToolEntry>,
    /// Index of the active tool panel.
    selected: usize,
    palette: Palette,
    mode: Mode,
    theme: Theme,
    messages: Vec<StatusMessage>,
    /// Sidebar entry currently flashing after a palette jump.
    flash: Option<(usize, Instant)>,
    should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &ToolpackConfig) -> Self {
        let tools = registry(config);
        let entries = index_entries(&tools);
        Self {
            tools,
            entries,
            selected: 0,
            palette: Palette::new(),
            mode: Mode::Normal,
            theme: Theme::dark(),
            messages: Vec::new(),
            flash: None,
            should_exit: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Sidebar labels in registration order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.label()).collect()
    }

    pub fn open_palette(&mut self) {
        self.palette.open(&self.entries);
        self.mode = Mode::Palette;
    }

    pub fn close_palette(&mut self) {
        self.palette.close();
        self.mode = Mode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Normal,
            _ => Mode::Help,
        };
    }

    pub fn next_tool(&mut self) {
        if self.selected + 1 < self.tools.len() {
            self.selected += 1;
        }
    }

    pub fn prev_tool(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(MESSAGE_TTL))
            .collect()
    }

    /// Sidebar index that should render with the flash style.
    #[must_use]
    pub fn flash_index(&self) -> Option<usize> {
        match self.flash {
            Some((index, since)) if since.elapsed() < FLASH_TTL => Some(index),
            _ => None,
        }
    }

    pub fn exit(&mut self) {
        self.should_exit = true;
    }

    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Forward a tool-produced event to the right subsystem.
    pub fn apply_tool_event(&mut self, event: ToolEvent) {
        match event {
            ToolEvent::Ignored | ToolEvent::Redraw => {}
            ToolEvent::Copy(text) => match clipboard::copy_text(&text) {
                Ok(()) => self.add_message(MessageLevel::Success, "copied".to_string()),
                Err(e) => self.add_message(MessageLevel::Error, e.to_string()),
            },
            ToolEvent::Status(level, text) => self.add_message(level, text),
            ToolEvent::Bell => {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(b"\x07");
                let _ = stdout.flush();
                self.add_message(MessageLevel::Info, "time's up".to_string());
            }
        }
    }

    /// Advance time-driven state: expired messages, the sidebar flash,
    /// and every tool's timers.
    pub fn tick(&mut self) {
        self.messages.retain(|m| !m.is_expired(MESSAGE_TTL));
        if let Some((_, since)) = self.flash
            && since.elapsed() >= FLASH_TTL
        {
            self.flash = None;
        }
        let ticked: Vec<ToolEvent> = self.tools.iter_mut().map(|tool| tool.tick()).collect();
        for event in ticked {
            self.apply_tool_event(event);
        }
    }

    /// Key press routed to the active tool panel.
    pub fn handle_tool_key(&mut self, key: crossterm::event::KeyEvent) {
        let event = self.tools[self.selected].handle_key(key);
        self.apply_tool_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(30)])
            .split(frame.area());

        let labels = self.labels();
        frame.render_widget(
            Sidebar::new(
                &labels,
                self.selected,
                self.flash_index(),
                &self.theme,
                false,
            ),
            columns[0],
        );

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        self.tools[self.selected].render(frame, main[0], &self.theme, self.mode == Mode::Normal);

        let messages = self.active_messages();
        frame.render_widget(StatusBar::new(&messages, &self.theme), main[1]);

        let hints = HelpBar::default_hints();
        frame.render_widget(HelpBar::new(&hints, &self.theme), main[2]);

        match self.mode {
            Mode::Palette => {
                frame.render_widget(
                    PaletteOverlay::new(self.palette.view(), &labels, &self.theme),
                    frame.area(),
                );
            }
            Mode::Help => {
                frame.render_widget(HelpOverlay::new(&self.theme), frame.area());
            }
            Mode::Normal => {}
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn cleanup_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits.
///
/// # Errors
///
/// Returns `AppError` on terminal failures; the terminal is restored
/// before the error propagates.
pub fn run(config: &ToolpackConfig) -> Result<(), AppError> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);

    let result = run_loop(&mut terminal, &mut app);

    let cleanup = cleanup_terminal();
    result?;
    cleanup
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    while !app.should_exit() {
        terminal.draw(|frame| app.draw(frame))?;
        app.tick();
        if poll_and_handle(app, POLL_INTERVAL)? == EventResult::Exit {
            app.exit();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = ToolpackConfig {
            notes_path: Some(std::env::temp_dir().join("toolpack-app-test-notes.json")),
            ..ToolpackConfig::new_default()
        };
        App::new(&config)
    }

    #[test]
    fn test_registry_order_matches_index() {
        let app = test_app();
        assert_eq!(app.tools.len(), app.entries.len());
        for (tool, entry) in app.tools.iter().zip(&app.entries) {
            assert_eq!(tool.id(), entry.id);
            assert_eq!(tool.label(), entry.label);
        }
    }

    #[test]
    fn test_tool_switching_clamps() {
        let mut app = test_app();
        app.prev_tool();
        assert_eq!(app.selected(), 0);
        for _ in 0..100 {
            app.next_tool();
        }
        assert_eq!(app.selected(), app.tools.len() - 1);
    }

    #[test]
    fn test_open_palette_switches_mode() {
        let mut app = test_app();
        app.open_palette();
        assert_eq!(app.mode(), Mode::Palette);
        app.close_palette();
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_messages_expire() {
        let mut app = test_app();
        app.add_message(MessageLevel::Info, "hello".to_string());
        assert_eq!(app.active_messages().len(), 1);
        app.messages[0].created_at = Instant::now() - MESSAGE_TTL - Duration::from_secs(1);
        app.tick();
        assert!(app.active_messages().is_empty());
    }

    #[test]
    fn test_help_toggles() {
        let mut app = test_app();
        app.toggle_help();
        assert_eq!(app.mode(), Mode::Help);
        app.toggle_help();
        assert_eq!(app.mode(), Mode::Normal);
    }
}
