//! Toolpack - a terminal multi-tool behind a command palette
//!
//! This library provides a set of small utility tools (calculator, unit
//! converter, encoders, generators, notes, and friends) with two
//! surfaces: an interactive TUI where a command palette jumps between
//! tool panels, and a CLI subcommand per tool driving the same pure
//! cores.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod palette;
pub mod store;
pub mod tools;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ToolpackError {
    /// Calculator error
    #[error("Calculation error: {0}")]
    Calc(#[from] tools::calc::CalcError),
    /// Unit conversion error
    #[error("Conversion error: {0}")]
    Convert(#[from] tools::convert::ConvertError),
    /// Base64 or URL codec error
    #[error("Encoding error: {0}")]
    Encode(#[from] tools::encode::EncodeError),
    /// JSON processing error
    #[error("JSON error: {0}")]
    Json(#[from] tools::json::JsonError),
    /// Password generation error
    #[error("Password error: {0}")]
    Password(#[from] tools::password::PasswordError),
    /// Color parsing error
    #[error("Color error: {0}")]
    Color(#[from] tools::contrast::ColorError),
    /// Image processing error
    #[error("Image error: {0}")]
    Image(#[from] tools::image::ImageToolError),
    /// Notes store error
    #[error("Notes error: {0}")]
    Store(#[from] store::StoreError),
    /// TUI error
    #[error("TUI error: {0}")]
    App(#[from] app::AppError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
