//! Unit converter: length, weight, and temperature.
//!
//! Length and weight convert through a base unit (metre, gram) with fixed
//! factors; temperature pivots through Celsius. Results are rounded to six
//! decimal places for display.

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

/// Errors from unit conversion.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// Unit name not known to the given kind
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    /// The two units belong to different quantities
    #[error("cannot convert between '{0}' and '{1}'")]
    MixedKinds(String, String),
    /// Input value did not parse as a number
    #[error("invalid value '{0}'")]
    InvalidValue(String),
}

/// Quantity families the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Length,
    Weight,
    Temperature,
}

impl UnitKind {
    /// All kinds, in panel order.
    pub const ALL: [Self; 3] = [Self::Length, Self::Weight, Self::Temperature];

    /// Display name for the kind selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Unit names with their factor to the base unit. Temperature factors
    /// are unused (conversion pivots through Celsius) but keep the table
    /// shape uniform.
    #[must_use]
    pub const fn units(self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Length => &[
                ("m", 1.0),
                ("km", 1000.0),
                ("cm", 0.01),
                ("mm", 0.001),
                ("in", 0.0254),
                ("ft", 0.3048),
                ("yd", 0.9144),
                ("mi", 1609.344),
            ],
            Self::Weight => &[
                ("g", 1.0),
                ("kg", 1000.0),
                ("lb", 453.59237),
                ("oz", 28.349523125),
            ],
            Self::Temperature => &[("C", 1.0), ("F", 1.0), ("K", 1.0)],
        }
    }

    fn factor(self, unit: &str) -> Result<f64, ConvertError> {
        self.units()
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(unit))
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConvertError::UnknownUnit(unit.to_string()))
    }

    fn has_unit(self, unit: &str) -> bool {
        self.units()
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(unit))
    }
}

/// Find the kind that owns both units, used when the CLI gets bare unit
/// names without a kind.
#[must_use]
pub fn kind_for(from: &str, to: &str) -> Option<UnitKind> {
    UnitKind::ALL
        .into_iter()
        .find(|kind| kind.has_unit(from) && kind.has_unit(to))
}

/// Convert `value` between two units of the same kind.
///
/// # Errors
///
/// Returns `ConvertError::UnknownUnit` if either unit is not in the kind's
/// table.
pub fn convert(kind: UnitKind, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let result = if kind == UnitKind::Temperature {
        let celsius = match from.to_ascii_uppercase().as_str() {
            "C" => value,
            "F" => (value - 32.0) * 5.0 / 9.0,
            "K" => value - 273.15,
            _ => return Err(ConvertError::UnknownUnit(from.to_string())),
        };
        match to.to_ascii_uppercase().as_str() {
            "C" => celsius,
            "F" => celsius * 9.0 / 5.0 + 32.0,
            "K" => celsius + 273.15,
            _ => return Err(ConvertError::UnknownUnit(to.to_string())),
        }
    } else {
        value * kind.factor(from)? / kind.factor(to)?
    };
    Ok(round6(result))
}

/// Round to six decimal places, matching the panel display.
#[must_use]
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Converter panel state.
#[derive(Debug)]
pub struct ConvertTool {
    kind_idx: usize,
    from_idx: usize,
    to_idx: usize,
    value: TextField,
    output: String,
}

impl Default for ConvertTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertTool {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind_idx: 0,
            from_idx: 0,
            to_idx: 1,
            value: TextField::new(),
            output: String::new(),
        }
    }

    fn kind(&self) -> UnitKind {
        UnitKind::ALL[self.kind_idx]
    }

    fn cycle_kind(&mut self) {
        self.kind_idx = (self.kind_idx + 1) % UnitKind::ALL.len();
        self.from_idx = 0;
        self.to_idx = 1 % self.kind().units().len();
        self.output.clear();
    }

    fn cycle_from(&mut self) {
        self.from_idx = (self.from_idx + 1) % self.kind().units().len();
    }

    fn cycle_to(&mut self) {
        self.to_idx = (self.to_idx + 1) % self.kind().units().len();
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.from_idx, &mut self.to_idx);
        self.run();
    }

    fn run(&mut self) {
        let kind = self.kind();
        let from = kind.units()[self.from_idx].0;
        let to = kind.units()[self.to_idx].0;
        self.output = match self.value.text().trim().parse::<f64>() {
            Ok(value) => match convert(kind, value, from, to) {
                Ok(result) => format!("{value} {from} = {result} {to}"),
                Err(e) => format!("Error: {e}"),
            },
            Err(_) if self.value.text().trim().is_empty() => "Enter a value".to_string(),
            Err(_) => format!("Error: {}", ConvertError::InvalidValue(self.value.text().into())),
        };
    }
}

impl Tool for ConvertTool {
    fn id(&self) -> &'static str {
        "convert"
    }

    fn label(&self) -> &'static str {
        "Unit Converter"
    }

    fn keywords(&self) -> &'static str {
        "units length weight temperature metric imperial"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.run();
                ToolEvent::Redraw
            }
            (KeyCode::Char('k'), KeyModifiers::ALT) => {
                self.cycle_kind();
                ToolEvent::Redraw
            }
            (KeyCode::Char('f'), KeyModifiers::ALT) => {
                self.cycle_from();
                ToolEvent::Redraw
            }
            (KeyCode::Char('t'), KeyModifiers::ALT) => {
                self.cycle_to();
                ToolEvent::Redraw
            }
            (KeyCode::Char('s'), KeyModifiers::ALT) => {
                self.swap();
                ToolEvent::Redraw
            }
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => ToolEvent::Copy(self.output.clone()),
            _ => {
                if self.value.handle_key(key) {
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
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let kind = self.kind();
        let selector = Line::from(vec![
            Span::styled("kind ", theme.dimmed_style()),
            Span::styled(kind.name(), theme.cursor_style()),
            Span::styled("  from ", theme.dimmed_style()),
            Span::styled(kind.units()[self.from_idx].0, theme.cursor_style()),
            Span::styled("  to ", theme.dimmed_style()),
            Span::styled(kind.units()[self.to_idx].0, theme.cursor_style()),
        ]);
        frame.render_widget(Paragraph::new(selector), rows[0]);

        frame.render_widget(self.value.widget("Value", theme, focused), rows[1]);

        let result = Line::from(Span::styled(
            if self.output.is_empty() { "—" } else { &self.output },
            theme.result_style(),
        ));
        frame.render_widget(Paragraph::new(result), rows[2]);

        let hint = Line::from(Span::styled(
            "Alt+k kind  Alt+f from  Alt+t to  Alt+s swap  Enter convert",
            theme.dimmed_style(),
        ));
        frame.render_widget(Paragraph::new(hint), rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        assert_eq!(convert(UnitKind::Length, 1.0, "km", "m").unwrap(), 1000.0);
        assert_eq!(convert(UnitKind::Length, 1.0, "mi", "km").unwrap(), 1.609344);
        assert_eq!(convert(UnitKind::Length, 12.0, "in", "ft").unwrap(), 1.0);
    }

    #[test]
    fn test_weight_conversion() {
        assert_eq!(convert(UnitKind::Weight, 1.0, "kg", "g").unwrap(), 1000.0);
        assert_eq!(convert(UnitKind::Weight, 16.0, "oz", "lb").unwrap(), 1.0);
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(convert(UnitKind::Temperature, 0.0, "C", "F").unwrap(), 32.0);
        assert_eq!(convert(UnitKind::Temperature, 212.0, "F", "C").unwrap(), 100.0);
        assert_eq!(convert(UnitKind::Temperature, 0.0, "C", "K").unwrap(), 273.15);
        assert_eq!(convert(UnitKind::Temperature, 300.0, "K", "C").unwrap(), 26.85);
    }

    #[test]
    fn test_round_trip_identity() {
        let out = convert(UnitKind::Length, 5.0, "m", "m").unwrap();
        assert_eq!(out, 5.0);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert(UnitKind::Length, 1.0, "furlong", "m").unwrap_err(),
            ConvertError::UnknownUnit("furlong".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_units() {
        assert_eq!(convert(UnitKind::Length, 1.0, "KM", "M").unwrap(), 1000.0);
        assert_eq!(convert(UnitKind::Temperature, 0.0, "c", "k").unwrap(), 273.15);
    }

    #[test]
    fn test_kind_for() {
        assert_eq!(kind_for("km", "mi"), Some(UnitKind::Length));
        assert_eq!(kind_for("kg", "oz"), Some(UnitKind::Weight));
        assert_eq!(kind_for("C", "F"), Some(UnitKind::Temperature));
        assert_eq!(kind_for("km", "kg"), None);
    }

    #[test]
    fn test_rounding_to_six_places() {
        // 1 oz in grams has more than six decimals; display rounds.
        assert_eq!(convert(UnitKind::Weight, 1.0, "oz", "g").unwrap(), 28.349523);
    }
}
