//! Calculator: arithmetic expression evaluation.
//!
//! Accepts `+ - * / ( )`, decimal numbers, and whitespace; `×` and `÷` are
//! normalized to `*` and `/` before parsing. Anything else is rejected up
//! front, so the grammar only ever sees a known alphabet.

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
use crate::ui::widgets::TextField;

/// Errors from expression evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// Expression contains a character outside the allowed alphabet
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),
    /// Expression is syntactically malformed
    #[error("syntax error at position {0}")]
    Syntax(usize),
    /// Result is infinite or NaN (e.g. division by zero)
    #[error("result is not a finite number")]
    NotFinite,
    /// Empty input
    #[error("empty expression")]
    Empty,
}

/// Evaluate an arithmetic expression.
///
/// # Errors
///
/// Returns `CalcError` on invalid characters, malformed syntax, empty input,
/// or a non-finite result.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let expr: String = expr
        .trim()
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect();

    if expr.is_empty() {
        return Err(CalcError::Empty);
    }

    if let Some(bad) = expr
        .chars()
        .find(|c| !matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' | ' ' | '\t'))
    {
        return Err(CalcError::InvalidCharacter(bad));
    }

    let chars: Vec<char> = expr.chars().collect();
    let mut parser = Parser { chars, pos: 0 };
    let value = parser.expression()?;
    if parser.peek().is_some() {
        return Err(CalcError::Syntax(parser.pos));
    }
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NotFinite)
    }
}

/// Recursive-descent parser. Whitespace is skipped between tokens but
/// never inside a number, so `2 3` is a syntax error rather than `23`.
///
/// Grammar:
///   expression := term (('+' | '-') term)*
///   term       := unary (('*' | '/') unary)*
///   unary      := ('+' | '-')* primary
///   primary    := number | '(' expression ')'
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek_raw(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek(&mut self) -> Option<char> {
        while matches!(self.peek_raw(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
        self.peek_raw()
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        let mut negate = false;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            if op == '-' {
                negate = !negate;
            }
        }
        let value = self.primary()?;
        Ok(if negate { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.expression()?;
                if self.peek() == Some(')') {
                    self.pos += 1;
                    Ok(value)
                } else {
                    Err(CalcError::Syntax(self.pos))
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            _ => Err(CalcError::Syntax(self.pos)),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.pos;
        while matches!(self.peek_raw(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse().map_err(|_| CalcError::Syntax(start))
    }
}

/// Format a result the way the panel and CLI display it.
#[must_use]
pub fn format_result(value: f64) -> String {
    // Trims float noise: integers print without a trailing ".0".
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Calculator panel state.
#[derive(Debug, Default)]
pub struct CalcTool {
    input: TextField,
    output: String,
}

impl CalcTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn run(&mut self) {
        self.output = match evaluate(self.input.text()) {
            Ok(value) => format_result(value),
            Err(CalcError::Empty) => "—".to_string(),
            Err(e) => format!("Error: {e}"),
        };
    }
}

impl Tool for CalcTool {
    fn id(&self) -> &'static str {
        "calc"
    }

    fn label(&self) -> &'static str {
        "Calculator"
    }

    fn keywords(&self) -> &'static str {
        "math arithmetic evaluate expression"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.run();
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                ToolEvent::Copy(self.output.clone())
            }
            _ => {
                if self.input.handle_key(key) {
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
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(self.input.widget("Expression", theme, focused), rows[0]);

        let result = Line::from(vec![
            Span::styled("= ", theme.dimmed_style()),
            Span::styled(
                if self.output.is_empty() { "—" } else { &self.output },
                theme.result_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(result), rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("2+2").unwrap(), 4.0);
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-3 + 5").unwrap(), 2.0);
        assert_eq!(evaluate("--3").unwrap(), 3.0);
        assert_eq!(evaluate("2 * -3").unwrap(), -6.0);
    }

    #[test]
    fn test_unicode_operators() {
        assert_eq!(evaluate("6 × 7").unwrap(), 42.0);
        assert_eq!(evaluate("9 ÷ 3").unwrap(), 3.0);
    }

    #[test]
    fn test_decimals() {
        assert!((evaluate("0.1 + 0.2").unwrap() - 0.3).abs() < 1e-9);
        assert_eq!(evaluate(".5 * 2").unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(evaluate("2 + x").unwrap_err(), CalcError::InvalidCharacter('x'));
        assert_eq!(
            evaluate("system('rm')").unwrap_err(),
            CalcError::InvalidCharacter('s')
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(evaluate("2 +").unwrap_err(), CalcError::Syntax(_)));
        assert!(matches!(evaluate("(2 + 3").unwrap_err(), CalcError::Syntax(_)));
        assert!(matches!(evaluate("2 3").unwrap_err(), CalcError::Syntax(_)));
        assert!(matches!(evaluate("1.2.3").unwrap_err(), CalcError::Syntax(_)));
    }

    #[test]
    fn test_adjacent_numbers_are_not_joined() {
        // A space never acts as a digit separator.
        assert!(matches!(evaluate("12 34").unwrap_err(), CalcError::Syntax(_)));
        assert!(matches!(evaluate("1 2 + 3").unwrap_err(), CalcError::Syntax(_)));
        assert_eq!(evaluate(" 12 + 34 ").unwrap(), 46.0);
        assert_eq!(evaluate("( 2 + 3 ) * 4").unwrap(), 20.0);
    }

    #[test]
    fn test_division_by_zero_is_not_finite() {
        assert_eq!(evaluate("1 / 0").unwrap_err(), CalcError::NotFinite);
        assert_eq!(evaluate("0 / 0").unwrap_err(), CalcError::NotFinite);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate("").unwrap_err(), CalcError::Empty);
        assert_eq!(evaluate("   ").unwrap_err(), CalcError::Empty);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-6.0), "-6");
    }
}
