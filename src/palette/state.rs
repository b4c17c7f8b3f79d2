//! Palette state machine.
//!
//! The palette is either closed or open. While open it owns the query, the
//! filtered result list, and the selection cursor. All mutation goes through
//! the transition methods below; the event layer translates key presses into
//! transitions and the render layer reads the state after each transition
//! completes. Every transition is total: bad input clamps or no-ops, it
//! never errors.

use crate::palette::filter::filter_indices;
use crate::palette::index::ToolEntry;

/// Palette controller state.
///
/// Invariant: whenever `results` is non-empty, `0 <= selected < results.len()`.
/// When `results` is empty, `selected` is irrelevant and navigation no-ops.
#[derive(Debug, Default)]
pub struct Palette {
    /// Whether the overlay is visible.
    open: bool,
    /// Current search query.
    query: String,
    /// Cursor position (byte offset) within the query.
    query_cursor: usize,
    /// Indices into the tool index matching the current query.
    results: Vec<usize>,
    /// Cursor position in `results`.
    selected: usize,
}

/// Read-only view of the palette for rendering.
#[derive(Debug, Clone, Copy)]
pub struct PaletteView<'a> {
    pub query: &'a str,
    pub query_cursor: usize,
    pub results: &'a [usize],
    pub selected: usize,
}

impl Palette {
    /// Create a closed palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the palette overlay is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open the palette, resetting the query and selection.
    ///
    /// Results are recomputed with the empty query so the full index shows
    /// immediately. Safe to call while already open; the reset still applies.
    pub fn open(&mut self, items: &[ToolEntry]) {
        self.open = true;
        self.query.clear();
        self.query_cursor = 0;
        self.results = filter_indices(items, "");
        self.selected = 0;
    }

    /// Close the palette. Focus returns to whatever opened it; the stale
    /// query and results are discarded on the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Recompute results for the current query and reset the selection.
    fn refresh(&mut self, items: &[ToolEntry]) {
        self.results = filter_indices(items, &self.query);
        self.selected = 0;
    }

    /// Insert a character at the query cursor.
    pub fn query_push(&mut self, c: char, items: &[ToolEntry]) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.refresh(items);
    }

    /// Remove the character before the query cursor.
    pub fn query_backspace(&mut self, items: &[ToolEntry]) {
        if self.query_cursor == 0 {
            return;
        }
        let prev = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev);
        self.query_cursor = prev;
        self.refresh(items);
    }

    /// Clear the whole query.
    pub fn query_clear(&mut self, items: &[ToolEntry]) {
        self.query.clear();
        self.query_cursor = 0;
        self.refresh(items);
    }

    /// Move the query cursor one character left.
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the query cursor one character right.
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Replace the query wholesale and recompute results.
    ///
    /// Used by tests and by programmatic jumps; interactive editing goes
    /// through `query_push`/`query_backspace`.
    pub fn set_query(&mut self, text: impl Into<String>, items: &[ToolEntry]) {
        self.query = text.into();
        self.query_cursor = self.query.len();
        self.refresh(items);
    }

    /// Move the selection by `delta`, clamped to the result bounds.
    ///
    /// No wraparound at either end. No-op when results are empty.
    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let max = self.results.len() - 1;
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(max);
    }

    /// Confirm the current selection.
    ///
    /// Returns the selected tool-index and closes the palette. When results
    /// are empty this is a no-op and the palette stays open.
    pub fn confirm_selection(&mut self) -> Option<usize> {
        let picked = self.results.get(self.selected).copied()?;
        self.close();
        Some(picked)
    }

    /// Snapshot of the state for rendering.
    #[must_use]
    pub fn view(&self) -> PaletteView<'_> {
        PaletteView {
            query: &self.query,
            query_cursor: self.query_cursor,
            results: &self.results,
            selected: self.selected,
        }
    }
}
