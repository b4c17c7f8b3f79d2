//! Palette-driven navigation between tool panels.

use std::time::Instant;

use super::{App, Mode};

impl App {
    /// Jump to the tool with the given id.
    ///
    /// Unknown ids are a silent no-op; the palette index and the
    /// registry are built from the same list, so a miss here means a
    /// stale entry rather than a user error. On a hit the sidebar
    /// scrolls the entry into view, flashes it, and focus moves to the
    /// panel.
    pub fn navigate(&mut self, id: &str) {
        let Some(index) = self.tools.iter().position(|tool| tool.id() == id) else {
            return;
        };
        self.selected = index;
        self.flash = Some((index, Instant::now()));
        self.mode = Mode::Normal;
    }

    /// Confirm the palette selection and jump to the picked tool.
    ///
    /// When the palette has no results this is a no-op and the palette
    /// stays open.
    pub fn confirm_palette(&mut self) {
        if let Some(entry_index) = self.palette.confirm_selection() {
            self.mode = Mode::Normal;
            let id = self.entries[entry_index].id.clone();
            self.navigate(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Mode};
    use crate::config::ToolpackConfig;

    fn test_app() -> App {
        let config = ToolpackConfig {
            notes_path: Some(std::env::temp_dir().join("toolpack-nav-test-notes.json")),
            ..ToolpackConfig::new_default()
        };
        App::new(&config)
    }

    #[test]
    fn test_navigate_selects_and_flashes() {
        let mut app = test_app();
        app.navigate("uuid");
        let selected = app.selected();
        assert_eq!(app.labels()[selected], "UUID Generator");
        assert_eq!(app.flash_index(), Some(selected));
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_navigate_unknown_id_is_noop() {
        let mut app = test_app();
        let before = app.selected();
        app.navigate("no-such-tool");
        assert_eq!(app.selected(), before);
        assert_eq!(app.flash_index(), None);
    }

    #[test]
    fn test_confirm_palette_jumps() {
        let mut app = test_app();
        app.open_palette();
        app.palette.set_query("uuid", &app.entries.clone());
        app.confirm_palette();
        assert_eq!(app.mode(), Mode::Normal);
        assert_eq!(app.labels()[app.selected()], "UUID Generator");
    }

    #[test]
    fn test_confirm_palette_no_results_stays_open() {
        let mut app = test_app();
        app.open_palette();
        app.palette.set_query("zzzzzz", &app.entries.clone());
        app.confirm_palette();
        assert_eq!(app.mode(), Mode::Palette);
    }
}
