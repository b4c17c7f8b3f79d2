//! Random password generation with a character-class pool and an
//! entropy estimate. Uses the thread-local CSPRNG.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use thiserror::Error;

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/~";

/// Characters easy to misread or awkward to paste into shells.
const AMBIGUOUS: &str = "O0Il|`'\" ";

const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 128;

/// Errors from password generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// All character classes were disabled
    #[error("no character classes selected")]
    EmptyPool,
    /// Requested length outside the supported range
    #[error("length must be between {MIN_LENGTH} and {MAX_LENGTH}")]
    BadLength,
}

/// Which character classes feed the pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub avoid_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 20,
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            avoid_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Build the character pool these options describe.
    #[must_use]
    pub fn pool(&self) -> Vec<char> {
        let mut pool = String::new();
        if self.lower {
            pool.push_str(LOWER);
        }
        if self.upper {
            pool.push_str(UPPER);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        if self.avoid_ambiguous {
            pool.retain(|c| !AMBIGUOUS.contains(c));
        }
        pool.chars().collect()
    }
}

/// Generate a password from the configured pool.
///
/// # Errors
///
/// Returns `PasswordError` when the pool is empty or the length is out
/// of range.
pub fn generate(options: &PasswordOptions) -> Result<String, PasswordError> {
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(PasswordError::BadLength);
    }
    let pool = options.pool();
    if pool.is_empty() {
        return Err(PasswordError::EmptyPool);
    }
    let mut rng = rand::rng();
    Ok((0..options.length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect())
}

/// Estimated entropy in bits: length * log2(pool size).
#[must_use]
pub fn entropy_bits(options: &PasswordOptions) -> f64 {
    let pool = options.pool();
    if pool.is_empty() {
        return 0.0;
    }
    options.length as f64 * (pool.len() as f64).log2()
}

/// Human label for an entropy estimate.
#[must_use]
pub fn strength_label(bits: f64) -> &'static str {
    if bits < 40.0 {
        "Weak"
    } else if bits < 60.0 {
        "Okay"
    } else if bits < 80.0 {
        "Strong"
    } else {
        "Very Strong"
    }
}

/// Password generator panel.
#[derive(Debug, Default)]
pub struct PasswordTool {
    options: PasswordOptions,
    output: String,
    error: Option<String>,
}

impl PasswordTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn regenerate(&mut self) {
        match generate(&self.options) {
            Ok(password) => {
                self.output = password;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn toggle_line(&self, theme: &Theme) -> Line<'_> {
        let flag = |on: bool, name: &'static str| {
            Span::styled(
                format!("[{}] {name}  ", if on { 'x' } else { ' ' }),
                if on {
                    theme.result_style()
                } else {
                    theme.dimmed_style()
                },
            )
        };
        Line::from(vec![
            flag(self.options.lower, "lower"),
            flag(self.options.upper, "upper"),
            flag(self.options.digits, "digits"),
            flag(self.options.symbols, "symbols"),
            flag(self.options.avoid_ambiguous, "no-ambiguous"),
        ])
    }
}

impl Tool for PasswordTool {
    fn id(&self) -> &'static str {
        "password"
    }

    fn label(&self) -> &'static str {
        "Password Generator"
    }

    fn keywords(&self) -> &'static str {
        "password generate random secret entropy strength"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) | (KeyCode::Char('g'), KeyModifiers::ALT) => {
                self.regenerate();
                ToolEvent::Redraw
            }
            (KeyCode::Left | KeyCode::Char('-'), _) => {
                self.options.length = self.options.length.saturating_sub(1).max(MIN_LENGTH);
                ToolEvent::Redraw
            }
            (KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('='), _) => {
                self.options.length = (self.options.length + 1).min(MAX_LENGTH);
                ToolEvent::Redraw
            }
            (KeyCode::Char('l'), KeyModifiers::ALT) => {
                self.options.lower = !self.options.lower;
                ToolEvent::Redraw
            }
            (KeyCode::Char('u'), KeyModifiers::ALT) => {
                self.options.upper = !self.options.upper;
                ToolEvent::Redraw
            }
            (KeyCode::Char('d'), KeyModifiers::ALT) => {
                self.options.digits = !self.options.digits;
                ToolEvent::Redraw
            }
            (KeyCode::Char('s'), KeyModifiers::ALT) => {
                self.options.symbols = !self.options.symbols;
                ToolEvent::Redraw
            }
            (KeyCode::Char('a'), KeyModifiers::ALT) => {
                self.options.avoid_ambiguous = !self.options.avoid_ambiguous;
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => ToolEvent::Copy(self.output.clone()),
            _ => ToolEvent::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, _focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Length: "),
                Span::styled(self.options.length.to_string(), theme.result_style()),
                Span::styled("  (←/→ adjust)", theme.dimmed_style()),
            ])),
            rows[0],
        );
        frame.render_widget(Paragraph::new(self.toggle_line(theme)), rows[1]);

        let bits = entropy_bits(&self.options);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!("Entropy: {bits:.0} bits ")),
                Span::styled(strength_label(bits), theme.result_style()),
            ])),
            rows[2],
        );

        let output = match &self.error {
            Some(e) => Line::from(Span::styled(e.as_str(), theme.error_style())),
            None if self.output.is_empty() => {
                Line::from(Span::styled("press Enter to generate", theme.dimmed_style()))
            }
            None => Line::from(Span::styled(self.output.as_str(), theme.result_style())),
        };
        frame.render_widget(Paragraph::new(output), rows[3]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Enter generate  Alt+l/u/d/s/a toggles  Ctrl+y copy",
                theme.dimmed_style(),
            ))),
            rows[4],
        );
    }
}
