//! Terminal UI building blocks.
//!
//! The TUI itself lives in [`crate::app`]; this module holds the pieces it
//! composes: the color [`theme`], reusable [`widgets`], and the
//! [`output`] layer shared with the CLI surface.

pub mod output;
pub mod theme;
pub mod widgets;

pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use theme::Theme;
