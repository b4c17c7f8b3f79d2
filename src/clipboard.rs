//! Clipboard access for the copy actions.
//!
//! arboard talks to the system clipboard; when that fails (headless
//! session, no display server) the OSC 52 escape sequence asks the
//! terminal emulator to take the payload instead.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Errors from clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("nothing to copy")]
    Empty,
}

/// Put `text` on the system clipboard.
///
/// # Errors
///
/// Returns `ClipboardError` when the payload is empty or both the
/// system clipboard and the terminal escape write fail.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => Ok(()),
        Err(_) => copy_osc52(text),
    }
}

/// OSC 52 fallback: hand the payload to the terminal emulator.
fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))
        .and_then(|()| stdout.flush())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
