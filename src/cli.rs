//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for toolpack using the
//! `clap` crate. Every tool panel has a matching subcommand driving the
//! same pure core, so everything the TUI computes is scriptable.
//!
//! # Commands
//!
//! - **tui**: Open the interactive tool panels (default)
//! - **calc**: Evaluate an arithmetic expression
//! - **convert**: Convert between units
//! - **text**: Text statistics and transforms
//! - **b64** / **url**: Encode and decode
//! - **json**: Format, minify, or validate JSON
//! - **password** / **uuid**: Generators
//! - **hash**: SHA-2 digests
//! - **contrast**: WCAG contrast check
//! - **resize**: Image resizing
//! - **notes**: Inspect and manage the notes store
//! - **completions**: Shell completion scripts
//!
//! Text-taking commands accept the text as an argument or, when it is
//! omitted, read it from stdin so they compose in pipes.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Text transform selector for the `text` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    /// Word, character, and line counts
    Stats,
    /// UPPERCASE
    Upper,
    /// lowercase
    Lower,
    /// Title Case
    Title,
    /// Reverse line order
    Reverse,
    /// Collapse runs of whitespace
    Squeeze,
}

/// Direction for the encoding commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    Encode,
    Decode,
}

/// Operation selector for the `json` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonOp {
    /// Pretty-print with two-space indentation
    Format,
    /// Most compact form
    Minify,
    /// Parse only, reporting the error position
    Validate,
}

/// Digest selector for the `hash` command
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlg {
    #[default]
    Sha256,
    Sha512,
}

/// Output encoding for the `resize` command
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeFormat {
    #[default]
    Png,
    Jpeg,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "toolpack")]
#[command(about = "A terminal multi-tool behind a command palette", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive tool panels (default)
    Tui,

    /// Evaluate an arithmetic expression
    #[command(visible_alias = "c")]
    Calc {
        /// Expression, e.g. "2 * (3 + 4)"
        #[arg(value_name = "EXPR")]
        expression: String,
    },

    /// Convert a value between units
    #[command(visible_alias = "cv")]
    Convert {
        /// Value to convert
        #[arg(value_name = "VALUE")]
        value: f64,

        /// Source unit, e.g. km, lb, C
        #[arg(value_name = "FROM")]
        from: String,

        /// Target unit, e.g. mi, kg, F
        #[arg(value_name = "TO")]
        to: String,
    },

    /// Text statistics and transforms
    #[command(visible_alias = "t")]
    Text {
        /// Which transform to apply
        #[arg(value_name = "OP")]
        op: TextOp,

        /// Input text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Base64 encode or decode
    B64 {
        /// encode or decode
        #[arg(value_name = "DIRECTION")]
        direction: CodecDirection,

        /// Input text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// URL percent-encode or decode
    Url {
        /// encode or decode
        #[arg(value_name = "DIRECTION")]
        direction: CodecDirection,

        /// Input text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Format, minify, or validate JSON
    #[command(visible_alias = "j")]
    Json {
        /// Which operation to run
        #[arg(value_name = "OP")]
        op: JsonOp,

        /// JSON text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Generate random passwords
    #[command(visible_alias = "pw")]
    Password {
        /// Password length
        #[arg(short = 'l', long = "length", default_value_t = 20)]
        length: usize,

        /// How many passwords to generate
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,

        /// Exclude uppercase letters
        #[arg(long = "no-upper")]
        no_upper: bool,

        /// Exclude digits
        #[arg(long = "no-digits")]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long = "no-symbols")]
        no_symbols: bool,

        /// Skip characters that are easy to misread (O, 0, I, l, ...)
        #[arg(long = "no-ambiguous")]
        no_ambiguous: bool,
    },

    /// Generate version-4 UUIDs
    Uuid {
        /// How many UUIDs to generate
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// SHA-2 digest of text
    #[command(visible_alias = "h")]
    Hash {
        /// Digest algorithm
        #[arg(short = 'a', long = "algorithm", value_enum, default_value_t = HashAlg::Sha256)]
        algorithm: HashAlg,

        /// Input text; read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// WCAG contrast check between two hex colors
    Contrast {
        /// Foreground color, #rgb or #rrggbb
        #[arg(value_name = "FOREGROUND")]
        foreground: String,

        /// Background color, #rgb or #rrggbb
        #[arg(value_name = "BACKGROUND")]
        background: String,
    },

    /// Resize an image
    Resize {
        /// Input image path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Target width in pixels; height follows the aspect ratio
        #[arg(short = 'w', long = "width", value_name = "PIXELS")]
        width: u32,

        /// Explicit height, overriding the aspect ratio
        #[arg(long = "height", value_name = "PIXELS")]
        height: Option<u32>,

        /// Output path; derived from the input when omitted
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output encoding
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ResizeFormat::Png)]
        format: ResizeFormat,

        /// JPEG quality, 1-100 (ignored for PNG)
        #[arg(
            long = "quality",
            value_name = "1-100",
            value_parser = clap::value_parser!(u8).range(1..=100)
        )]
        quality: Option<u8>,
    },

    /// Inspect and manage the notes store
    #[command(visible_alias = "n")]
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Subcommands for `notes`
#[derive(Subcommand, Debug, Clone)]
pub enum NotesCommands {
    /// Print all saved notes
    Show,
    /// Write the notes store to a file as JSON
    Export {
        /// Destination path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the notes store with the contents of a JSON file
    Import {
        /// Source path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete all saved notes
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse arguments from the environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the TUI if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args should parse")
    }

    #[test]
    fn test_no_args_defaults_to_tui() {
        let cli = parse(&["toolpack"]);
        assert!(matches!(cli.get_command(), Commands::Tui));
    }

    #[test]
    fn test_calc_alias() {
        let cli = parse(&["toolpack", "c", "1+2"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Calc { expression } if expression == "1+2"
        ));
    }

    #[test]
    fn test_convert_args() {
        let cli = parse(&["toolpack", "convert", "10", "km", "mi"]);
        match cli.get_command() {
            Commands::Convert { value, from, to } => {
                assert!((value - 10.0).abs() < f64::EPSILON);
                assert_eq!(from, "km");
                assert_eq!(to, "mi");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_op_without_text_allows_stdin() {
        let cli = parse(&["toolpack", "text", "stats"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Text { op: TextOp::Stats, text: None }
        ));
    }

    #[test]
    fn test_password_flags() {
        let cli = parse(&[
            "toolpack", "pw", "-l", "32", "-n", "3", "--no-symbols", "--no-ambiguous",
        ]);
        match cli.get_command() {
            Commands::Password {
                length,
                count,
                no_symbols,
                no_ambiguous,
                no_upper,
                no_digits,
            } => {
                assert_eq!(length, 32);
                assert_eq!(count, 3);
                assert!(no_symbols && no_ambiguous);
                assert!(!no_upper && !no_digits);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_quiet_after_subcommand() {
        let cli = parse(&["toolpack", "uuid", "-q"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_resize_requires_width() {
        assert!(Cli::try_parse_from(["toolpack", "resize", "a.png"]).is_err());
    }

    #[test]
    fn test_resize_quality_flag() {
        let cli = parse(&[
            "toolpack", "resize", "a.png", "-w", "640", "-f", "jpeg", "--quality", "75",
        ]);
        match cli.get_command() {
            Commands::Resize { quality, format, .. } => {
                assert_eq!(quality, Some(75));
                assert_eq!(format, ResizeFormat::Jpeg);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from([
            "toolpack", "resize", "a.png", "-w", "640", "--quality", "0"
        ])
        .is_err());
    }

    #[test]
    fn test_notes_clear_force() {
        let cli = parse(&["toolpack", "notes", "clear", "-f"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Notes {
                command: NotesCommands::Clear { force: true }
            }
        ));
    }
}
