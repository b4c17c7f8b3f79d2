//! Reusable widgets for the toolpack TUI.

mod help_bar;
mod help_overlay;
mod palette_overlay;
mod sidebar;
mod status_bar;
mod text_area;
mod text_field;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use palette_overlay::PaletteOverlay;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use text_area::{TextArea, TextAreaWidget};
pub use text_field::{TextField, TextFieldWidget};
