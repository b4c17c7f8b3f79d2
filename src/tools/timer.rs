//! Stopwatch and countdown timer.
//!
//! The countdown is deadline-based so a slow event loop cannot drift
//! it; the stopwatch accumulates across pauses.

use std::time::{Duration, Instant};

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

/// Errors from duration entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    /// Not `SS`, `MM:SS`, or `HH:MM:SS`
    #[error("expected seconds or MM:SS, got {0:?}")]
    BadDuration(String),
}

/// Parse `90`, `1:30`, or `0:01:30` into a duration.
///
/// # Errors
///
/// Returns `TimerError::BadDuration` on anything else.
pub fn parse_duration(text: &str) -> Result<Duration, TimerError> {
    let raw = text.trim();
    let bad = || TimerError::BadDuration(raw.to_string());
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(bad());
    }
    let mut seconds: u64 = 0;
    for part in &parts {
        let value: u64 = part.parse().map_err(|_| bad())?;
        seconds = seconds * 60 + value;
    }
    if seconds == 0 {
        return Err(bad());
    }
    Ok(Duration::from_secs(seconds))
}

/// Format an elapsed time as `MM:SS.cc`.
#[must_use]
pub fn format_stopwatch(elapsed: Duration) -> String {
    let total = elapsed.as_millis();
    let minutes = total / 60_000;
    let seconds = (total / 1000) % 60;
    let centis = (total / 10) % 100;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Format a remaining time as `MM:SS`, rounding up so the display
/// only shows 00:00 once the countdown has actually finished.
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.as_millis().div_ceil(1000);
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerMode {
    Stopwatch,
    Countdown,
}

#[derive(Debug, Default)]
struct Stopwatch {
    accumulated: Duration,
    started_at: Option<Instant>,
    laps: Vec<Duration>,
}

impl Stopwatch {
    fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(start) => self.accumulated + start.elapsed(),
            None => self.accumulated,
        }
    }

    fn toggle(&mut self) {
        match self.started_at.take() {
            Some(start) => self.accumulated += start.elapsed(),
            None => self.started_at = Some(Instant::now()),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[derive(Debug, Default)]
struct Countdown {
    remaining: Duration,
    deadline: Option<Instant>,
    finished: bool,
}

impl Countdown {
    fn arm(&mut self, duration: Duration) {
        self.remaining = duration;
        self.deadline = None;
        self.finished = false;
    }

    fn left(&self) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => self.remaining,
        }
    }

    fn toggle(&mut self) {
        if self.finished || self.remaining.is_zero() && self.deadline.is_none() {
            return;
        }
        match self.deadline.take() {
            Some(deadline) => self.remaining = deadline.saturating_duration_since(Instant::now()),
            None => self.deadline = Some(Instant::now() + self.remaining),
        }
    }

    fn running(&self) -> bool {
        self.deadline.is_some()
    }

    // True exactly once, on the tick that crosses zero.
    fn check_finished(&mut self) -> bool {
        if self.finished || !self.running() {
            return false;
        }
        if self.left().is_zero() {
            self.deadline = None;
            self.remaining = Duration::ZERO;
            self.finished = true;
            return true;
        }
        false
    }
}

/// Stopwatch and countdown panel.
#[derive(Debug)]
pub struct TimerTool {
    mode: TimerMode,
    stopwatch: Stopwatch,
    countdown: Countdown,
    duration_input: TextField,
    input_error: Option<String>,
    bell: bool,
}

impl TimerTool {
    #[must_use]
    pub fn new(bell: bool) -> Self {
        Self {
            mode: TimerMode::Stopwatch,
            stopwatch: Stopwatch::default(),
            countdown: Countdown::default(),
            duration_input: TextField::with_text("5:00"),
            input_error: None,
            bell,
        }
    }
}

impl Tool for TimerTool {
    fn id(&self) -> &'static str {
        "timer"
    }

    fn label(&self) -> &'static str {
        "Timer & Stopwatch"
    }

    fn keywords(&self) -> &'static str {
        "timer stopwatch countdown alarm lap"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Char('m'), KeyModifiers::ALT) => {
                self.mode = match self.mode {
                    TimerMode::Stopwatch => TimerMode::Countdown,
                    TimerMode::Countdown => TimerMode::Stopwatch,
                };
                ToolEvent::Redraw
            }
            (KeyCode::Enter, _) => {
                match self.mode {
                    TimerMode::Stopwatch => self.stopwatch.toggle(),
                    TimerMode::Countdown => {
                        if !self.countdown.running() && self.countdown.remaining.is_zero()
                            || self.countdown.finished
                        {
                            match parse_duration(self.duration_input.text()) {
                                Ok(duration) => {
                                    self.countdown.arm(duration);
                                    self.countdown.toggle();
                                    self.input_error = None;
                                }
                                Err(e) => self.input_error = Some(e.to_string()),
                            }
                        } else {
                            self.countdown.toggle();
                        }
                    }
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('l'), KeyModifiers::ALT) => {
                if self.mode == TimerMode::Stopwatch && self.stopwatch.running() {
                    let elapsed = self.stopwatch.elapsed();
                    self.stopwatch.laps.push(elapsed);
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('r'), KeyModifiers::ALT) => {
                match self.mode {
                    TimerMode::Stopwatch => self.stopwatch.reset(),
                    TimerMode::Countdown => self.countdown.arm(Duration::ZERO),
                }
                ToolEvent::Redraw
            }
            _ => {
                if self.mode == TimerMode::Countdown
                    && !self.countdown.running()
                    && self.duration_input.handle_key(key)
                {
                    ToolEvent::Redraw
                } else {
                    ToolEvent::Ignored
                }
            }
        }
    }

    fn tick(&mut self) -> ToolEvent {
        if self.countdown.check_finished() {
            if self.bell {
                return ToolEvent::Bell;
            }
            return ToolEvent::Redraw;
        }
        if self.stopwatch.running() || self.countdown.running() {
            ToolEvent::Redraw
        } else {
            ToolEvent::Ignored
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(area);

        let mode = match self.mode {
            TimerMode::Stopwatch => "Stopwatch",
            TimerMode::Countdown => "Countdown",
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Mode: "),
                Span::styled(mode, theme.result_style()),
            ])),
            rows[0],
        );

        match self.mode {
            TimerMode::Stopwatch => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format_stopwatch(self.stopwatch.elapsed()),
                        theme.result_style(),
                    ))),
                    rows[1],
                );
                let laps: Vec<Line> = self
                    .stopwatch
                    .laps
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(i, lap)| {
                        Line::from(Span::styled(
                            format!("lap {:>2}  {}", i + 1, format_stopwatch(*lap)),
                            theme.dimmed_style(),
                        ))
                    })
                    .collect();
                frame.render_widget(Paragraph::new(laps), rows[2]);
            }
            TimerMode::Countdown => {
                frame.render_widget(
                    self.duration_input.widget(
                        "Duration",
                        theme,
                        focused && !self.countdown.running(),
                    ),
                    rows[1],
                );
                let line = if let Some(error) = &self.input_error {
                    Line::from(Span::styled(error.as_str(), theme.error_style()))
                } else if self.countdown.finished {
                    Line::from(Span::styled("00:00  time's up", theme.highlight_style()))
                } else {
                    Line::from(Span::styled(
                        format_countdown(self.countdown.left()),
                        theme.result_style(),
                    ))
                };
                frame.render_widget(Paragraph::new(line), rows[2]);
            }
        }

        let hint = match self.mode {
            TimerMode::Stopwatch => "Enter start/pause  Alt+l lap  Alt+r reset  Alt+m mode",
            TimerMode::Countdown => "Enter start/pause  Alt+r reset  Alt+m mode",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, theme.dimmed_style()))),
            rows[3],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("90").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("1:30").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("0:01:30").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("1:2:3:4").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration(":30").is_err());
    }

    #[test]
    fn test_format_stopwatch() {
        assert_eq!(format_stopwatch(Duration::from_millis(0)), "00:00.00");
        assert_eq!(format_stopwatch(Duration::from_millis(61_230)), "01:01.23");
    }

    #[test]
    fn test_format_countdown_rounds_up() {
        assert_eq!(format_countdown(Duration::from_millis(100)), "00:01");
        assert_eq!(format_countdown(Duration::from_secs(0)), "00:00");
        assert_eq!(format_countdown(Duration::from_secs(90)), "01:30");
    }

    #[test]
    fn test_stopwatch_pause_keeps_elapsed() {
        let mut sw = Stopwatch::default();
        sw.toggle();
        std::thread::sleep(Duration::from_millis(20));
        sw.toggle();
        let frozen = sw.elapsed();
        assert!(frozen >= Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(sw.elapsed(), frozen);
    }

    #[test]
    fn test_countdown_finishes_once() {
        let mut cd = Countdown::default();
        cd.arm(Duration::from_millis(10));
        cd.toggle();
        std::thread::sleep(Duration::from_millis(20));
        assert!(cd.check_finished());
        assert!(!cd.check_finished());
        assert!(cd.finished);
    }

    #[test]
    fn test_countdown_pause_resume() {
        let mut cd = Countdown::default();
        cd.arm(Duration::from_secs(60));
        cd.toggle();
        cd.toggle();
        assert!(!cd.running());
        assert!(cd.left() > Duration::from_secs(59));
    }
}
