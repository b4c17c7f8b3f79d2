//! Command palette: index, filter, and controller state machine.
//!
//! The palette indexes the registered tools and provides keyboard-driven
//! jumps between them. State lives in [`Palette`] and is only mutated
//! through its transition methods; rendering reads a [`PaletteView`]
//! snapshot after each transition.

pub mod filter;
pub mod index;
pub mod state;

pub use filter::filter_indices;
pub use index::ToolEntry;
pub use state::{Palette, PaletteView};
