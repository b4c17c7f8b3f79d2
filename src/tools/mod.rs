//! Tool panels.
//!
//! Each tool is an independent controller: it owns its own form state,
//! validates its own input, and computes with pure functions that are also
//! exported for the CLI surface. Tools never talk to each other; the only
//! shared plumbing is the [`Tool`] trait the app drives them through and
//! the palette index built from their id/label/keywords.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::palette::ToolEntry;
use crate::ui::MessageLevel;
use crate::ui::theme::Theme;

pub mod calc;
pub mod contrast;
pub mod convert;
pub mod encode;
pub mod hash;
pub mod image;
pub mod json;
pub mod notes;
pub mod password;
pub mod textutil;
pub mod timer;
pub mod uuid;

/// What a tool wants the app to do after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEvent {
    /// Event was not for this tool
    Ignored,
    /// State changed, repaint on the next frame
    Redraw,
    /// Put this text on the clipboard and report the outcome
    Copy(String),
    /// Show a status message
    Status(MessageLevel, String),
    /// Ring the terminal bell (countdown expiry)
    Bell,
}

/// One self-contained utility panel.
pub trait Tool {
    /// Stable identifier; the palette navigates by this.
    fn id(&self) -> &'static str;
    /// Display label shown in the sidebar and palette.
    fn label(&self) -> &'static str;
    /// Free-text keywords for palette matching.
    fn keywords(&self) -> &'static str;
    /// Handle a key event while this panel has focus.
    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent;
    /// Advance time-driven state (timers, debounced saves). Called on every
    /// poll-loop iteration regardless of focus.
    fn tick(&mut self) -> ToolEvent {
        ToolEvent::Ignored
    }
    /// Render the panel into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool);
}

/// Build the tool registry in page order.
///
/// The order here is the registration order the palette preserves.
#[must_use]
pub fn registry(config: &crate::config::ToolpackConfig) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(calc::CalcTool::new()),
        Box::new(convert::ConvertTool::new()),
        Box::new(textutil::TextTool::new()),
        Box::new(encode::Base64Tool::new()),
        Box::new(encode::UrlTool::new()),
        Box::new(json::JsonTool::new()),
        Box::new(password::PasswordTool::new()),
        Box::new(uuid::UuidTool::new()),
        Box::new(hash::HashTool::new()),
        Box::new(image::ImageTool::new()),
        Box::new(contrast::ContrastTool::new()),
        Box::new(timer::TimerTool::new(config.bell)),
        Box::new(notes::NotesTool::new(config.notes_file())),
    ]
}

/// Build the palette index from a registry.
#[must_use]
pub fn index_entries(tools: &[Box<dyn Tool>]) -> Vec<ToolEntry> {
    tools
        .iter()
        .map(|tool| ToolEntry::new(tool.id(), tool.label(), tool.keywords()))
        .collect()
}
