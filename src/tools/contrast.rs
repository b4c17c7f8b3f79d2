//! WCAG contrast checking between two hex colors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use thiserror::Error;

use crate::tools::{Tool, ToolEvent};
use crate::ui::theme::Theme;
use crate::ui::widgets::TextField;

/// Errors from color parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// Not a recognised #rgb or #rrggbb string
    #[error("expected #rgb or #rrggbb, got {0:?}")]
    BadFormat(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse `#rgb` or `#rrggbb`, leading `#` optional.
///
/// # Errors
///
/// Returns `ColorError::BadFormat` for anything else.
pub fn parse_hex_color(text: &str) -> Result<Rgb, ColorError> {
    let raw = text.trim();
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    let bad = || ColorError::BadFormat(raw.to_string());
    let nibble = |c: char| c.to_digit(16).map(|d| d as u8).ok_or_else(bad);

    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        3 => {
            let r = nibble(chars[0])?;
            let g = nibble(chars[1])?;
            let b = nibble(chars[2])?;
            Ok(Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        6 => {
            let byte =
                |i: usize| -> Result<u8, ColorError> { Ok(nibble(chars[i])? * 16 + nibble(chars[i + 1])?) };
            Ok(Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            })
        }
        _ => Err(bad()),
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, rounded to two decimals.
///
/// Symmetric in its arguments; ranges from 1.0 to 21.0.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// Pass/fail ratings at the WCAG thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastRating {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

/// Rate a contrast ratio against the AA and AAA thresholds.
#[must_use]
pub fn rate(ratio: f64) -> ContrastRating {
    ContrastRating {
        aa_normal: ratio >= 4.5,
        aa_large: ratio >= 3.0,
        aaa_normal: ratio >= 7.0,
        aaa_large: ratio >= 4.5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Foreground,
    Background,
}

/// Contrast checker panel with a live preview swatch.
#[derive(Debug)]
pub struct ContrastTool {
    foreground: TextField,
    background: TextField,
    active: Field,
}

impl Default for ContrastTool {
    fn default() -> Self {
        Self {
            foreground: TextField::with_text("#000000"),
            background: TextField::with_text("#ffffff"),
            active: Field::Foreground,
        }
    }
}

impl ContrastTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn colors(&self) -> (Result<Rgb, ColorError>, Result<Rgb, ColorError>) {
        (
            parse_hex_color(self.foreground.text()),
            parse_hex_color(self.background.text()),
        )
    }
}

impl Tool for ContrastTool {
    fn id(&self) -> &'static str {
        "contrast"
    }

    fn label(&self) -> &'static str {
        "Contrast Checker"
    }

    fn keywords(&self) -> &'static str {
        "contrast color wcag accessibility ratio hex"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => {
                self.active = match self.active {
                    Field::Foreground => Field::Background,
                    Field::Background => Field::Foreground,
                };
                ToolEvent::Redraw
            }
            (KeyCode::Char('s'), KeyModifiers::ALT) => {
                let fg = self.foreground.text().to_string();
                self.foreground.set_text(self.background.text().to_string());
                self.background.set_text(fg);
                ToolEvent::Redraw
            }
            _ => {
                let field = match self.active {
                    Field::Foreground => &mut self.foreground,
                    Field::Background => &mut self.background,
                };
                if field.handle_key(key) {
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
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            self.foreground.widget(
                "Foreground",
                theme,
                focused && self.active == Field::Foreground,
            ),
            rows[0],
        );
        frame.render_widget(
            self.background.widget(
                "Background",
                theme,
                focused && self.active == Field::Background,
            ),
            rows[1],
        );

        match self.colors() {
            (Ok(fg), Ok(bg)) => {
                let ratio = contrast_ratio(fg, bg);
                let rating = rate(ratio);
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::raw("Ratio: "),
                        Span::styled(format!("{ratio:.2}:1"), theme.result_style()),
                    ])),
                    rows[2],
                );
                let verdict = |pass: bool, name: &'static str| {
                    Span::styled(
                        format!("{name} {}  ", if pass { "pass" } else { "fail" }),
                        if pass {
                            theme.success_style()
                        } else {
                            theme.error_style()
                        },
                    )
                };
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        verdict(rating.aa_normal, "AA"),
                        verdict(rating.aa_large, "AA-large"),
                        verdict(rating.aaa_normal, "AAA"),
                        verdict(rating.aaa_large, "AAA-large"),
                    ])),
                    rows[3],
                );
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        " Sample text ",
                        Style::default()
                            .fg(Color::Rgb(fg.r, fg.g, fg.b))
                            .bg(Color::Rgb(bg.r, bg.g, bg.b)),
                    ))),
                    rows[4],
                );
            }
            (fg, bg) => {
                let message = fg.err().or_else(|| bg.err()).map_or_else(
                    || "invalid color".to_string(),
                    |e| e.to_string(),
                );
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(message, theme.error_style()))),
                    rows[2],
                );
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Tab switch field  Alt+s swap",
                theme.dimmed_style(),
            ))),
            rows[5],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_parse_long_form() {
        assert_eq!(
            parse_hex_color("#1a2b3c").unwrap(),
            Rgb {
                r: 0x1a,
                g: 0x2b,
                b: 0x3c
            }
        );
    }

    #[test]
    fn test_parse_short_form_expands() {
        assert_eq!(parse_hex_color("#fff").unwrap(), WHITE);
        assert_eq!(
            parse_hex_color("#a5f").unwrap(),
            Rgb {
                r: 0xaa,
                g: 0x55,
                b: 0xff
            }
        );
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(parse_hex_color("000000").unwrap(), BLACK);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_black_on_white_is_21() {
        assert!((contrast_ratio(BLACK, WHITE) - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_symmetric() {
        let gray = Rgb {
            r: 0x76,
            g: 0x76,
            b: 0x76,
        };
        assert!((contrast_ratio(gray, WHITE) - contrast_ratio(WHITE, gray)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_color_is_one() {
        assert!((contrast_ratio(WHITE, WHITE) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_thresholds() {
        let rating = rate(4.5);
        assert!(rating.aa_normal && rating.aa_large && rating.aaa_large);
        assert!(!rating.aaa_normal);

        let weak = rate(2.9);
        assert!(!weak.aa_large && !weak.aa_normal);
    }
}
