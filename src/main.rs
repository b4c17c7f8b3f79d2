//! Toolpack CLI application entry point
//!
//! This is the main executable for toolpack. With no subcommand it
//! opens the interactive TUI; each subcommand runs one tool's pure
//! core directly so everything is scriptable.
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive tool panels (default command)
//! toolpack
//! toolpack tui
//!
//! # Evaluate an expression
//! toolpack calc "2 * (3 + 4)"
//!
//! # Convert units
//! toolpack convert 10 km mi
//!
//! # Pipe text through the transforms
//! cat notes.txt | toolpack text squeeze
//!
//! # Generate credentials
//! toolpack password -l 32 --no-ambiguous
//! toolpack uuid -n 5
//!
//! # Quiet mode (only output results)
//! toolpack -q hash "hello"
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/toolpack/config.toml` on Linux) and is created with
//! defaults on first run.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use colored::Colorize;

use toolpack::{
    cli::{Cli, CodecDirection, Commands, HashAlg, JsonOp, NotesCommands, ResizeFormat, TextOp},
    config::ToolpackConfig,
    store,
    tools::{calc, contrast, convert, encode, hash, image, json, password, textutil, uuid},
    ui::{OutputWriter, StdoutWriter},
    ToolpackError,
};

type Result<T> = std::result::Result<T, ToolpackError>;

/// Take text from the argument or, when omitted, from stdin.
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            while buffer.ends_with('\n') {
                buffer.pop();
            }
            Ok(buffer)
        }
    }
}

fn handle_calc(expression: &str, out: &StdoutWriter) -> Result<()> {
    let value = calc::evaluate(expression)?;
    out.write(&calc::format_result(value));
    Ok(())
}

fn handle_convert(value: f64, from: &str, to: &str, out: &StdoutWriter) -> Result<()> {
    let kind = convert::kind_for(from, to)
        .ok_or_else(|| convert::ConvertError::MixedKinds(from.to_string(), to.to_string()))?;
    let converted = convert::convert(kind, value, from, to)?;
    out.write(&format!("{converted}"));
    Ok(())
}

fn handle_text(op: TextOp, text: Option<String>, out: &StdoutWriter) -> Result<()> {
    let input = read_input(text)?;
    match op {
        TextOp::Stats => {
            let counts = textutil::stats(&input);
            out.write(&format!(
                "words: {}\ncharacters: {}\nlines: {}",
                counts.words, counts.chars, counts.lines
            ));
        }
        TextOp::Upper => out.write(&input.to_uppercase()),
        TextOp::Lower => out.write(&input.to_lowercase()),
        TextOp::Title => out.write(&textutil::title_case(&input)),
        TextOp::Reverse => out.write(&textutil::reverse_lines(&input)),
        TextOp::Squeeze => out.write(&textutil::squeeze_whitespace(&input)),
    }
    Ok(())
}

fn handle_b64(direction: CodecDirection, text: Option<String>, out: &StdoutWriter) -> Result<()> {
    let input = read_input(text)?;
    let result = match direction {
        CodecDirection::Encode => encode::b64_encode(&input),
        CodecDirection::Decode => encode::b64_decode(&input)?,
    };
    out.write(&result);
    Ok(())
}

fn handle_url(direction: CodecDirection, text: Option<String>, out: &StdoutWriter) -> Result<()> {
    let input = read_input(text)?;
    let result = match direction {
        CodecDirection::Encode => encode::url_encode(&input),
        CodecDirection::Decode => encode::url_decode(&input)?,
    };
    out.write(&result);
    Ok(())
}

fn handle_json(op: JsonOp, text: Option<String>, out: &StdoutWriter) -> Result<()> {
    let input = read_input(text)?;
    match op {
        JsonOp::Format => out.write(&json::format_json(&input)?),
        JsonOp::Minify => out.write(&json::minify_json(&input)?),
        JsonOp::Validate => {
            json::validate_json(&input)?;
            out.success("valid JSON");
        }
    }
    Ok(())
}

#[allow(clippy::fn_params_excessive_bools)]
fn handle_password(
    length: usize,
    count: usize,
    no_upper: bool,
    no_digits: bool,
    no_symbols: bool,
    no_ambiguous: bool,
    out: &StdoutWriter,
) -> Result<()> {
    let options = password::PasswordOptions {
        length,
        lower: true,
        upper: !no_upper,
        digits: !no_digits,
        symbols: !no_symbols,
        avoid_ambiguous: no_ambiguous,
    };
    for _ in 0..count {
        out.write(&password::generate(&options)?);
    }
    let bits = password::entropy_bits(&options);
    out.info(&format!(
        "{:.0} bits of entropy ({})",
        bits,
        password::strength_label(bits)
    ));
    Ok(())
}

fn handle_uuid(count: usize, out: &StdoutWriter) {
    for _ in 0..count {
        out.write(&uuid::uuid_v4());
    }
}

fn handle_hash(algorithm: HashAlg, text: Option<String>, out: &StdoutWriter) -> Result<()> {
    let input = read_input(text)?;
    let digest = match algorithm {
        HashAlg::Sha256 => hash::sha256_hex(&input),
        HashAlg::Sha512 => hash::sha512_hex(&input),
    };
    out.write(&digest);
    Ok(())
}

fn handle_contrast(foreground: &str, background: &str, out: &StdoutWriter) -> Result<()> {
    let fg = contrast::parse_hex_color(foreground)?;
    let bg = contrast::parse_hex_color(background)?;
    let ratio = contrast::contrast_ratio(fg, bg);
    let rating = contrast::rate(ratio);

    out.write(&format!("{ratio:.2}:1"));
    let verdict = |pass: bool| {
        if pass {
            "pass".green()
        } else {
            "fail".red()
        }
    };
    out.write(&format!(
        "AA: {}  AA-large: {}  AAA: {}  AAA-large: {}",
        verdict(rating.aa_normal),
        verdict(rating.aa_large),
        verdict(rating.aaa_normal),
        verdict(rating.aaa_large),
    ));
    Ok(())
}

fn handle_resize(
    input: &Path,
    width: u32,
    height: Option<u32>,
    output: Option<PathBuf>,
    format: ResizeFormat,
    quality: Option<u8>,
    out: &StdoutWriter,
) -> Result<()> {
    if quality.is_some() && format == ResizeFormat::Png {
        out.warning("--quality only applies to JPEG output");
    }
    let quality = quality.unwrap_or(image::DEFAULT_JPEG_QUALITY);
    let format = match format {
        ResizeFormat::Png => image::OutputFormat::Png,
        ResizeFormat::Jpeg => image::OutputFormat::Jpeg,
    };
    let source = image::probe(input)?;
    out.info(&format!("source: {}", source.summary()));

    let (width, height) = match height {
        Some(height) => (width, height),
        None => image::scale_to_width(source.width, source.height, width),
    };
    let output = output.unwrap_or_else(|| image::output_path(input, width, format));
    let written = image::resize_file(input, &output, width, height, format, quality)?;
    out.success(&format!("wrote {} ({})", output.display(), written.summary()));
    Ok(())
}

fn handle_notes(
    config: &ToolpackConfig,
    command: &NotesCommands,
    quiet: bool,
    out: &StdoutWriter,
) -> Result<()> {
    let path = config.notes_file();
    match command {
        NotesCommands::Show => {
            let notes = store::load_notes(&path)?;
            if notes.is_empty() {
                out.info("no notes saved");
            }
            for note in &notes {
                let title = if note.title.is_empty() {
                    "(untitled)"
                } else {
                    &note.title
                };
                out.write(&format!(
                    "{} {}",
                    title.bold(),
                    note.saved_at
                        .format("(%Y-%m-%d %H:%M)")
                        .to_string()
                        .dimmed()
                ));
                out.write(&note.content);
            }
        }
        NotesCommands::Export { file } => {
            let notes = store::load_notes(&path)?;
            store::save_notes(file, &notes)?;
            out.success(&format!("exported {} note(s) to {}", notes.len(), file.display()));
        }
        NotesCommands::Import { file } => {
            let notes = store::load_notes(file)?;
            store::save_notes(&path, &notes)?;
            out.success(&format!("imported {} note(s)", notes.len()));
        }
        NotesCommands::Clear { force } => {
            let notes = store::load_notes(&path)?;
            if notes.is_empty() {
                out.info("no notes to clear");
                return Ok(());
            }
            let confirmed = *force
                || quiet
                || dialoguer::Confirm::new()
                    .with_prompt(format!("Delete {} saved note(s)?", notes.len()))
                    .default(false)
                    .interact()?;
            if confirmed {
                store::save_notes(&path, &[])?;
                out.success("notes cleared");
            } else {
                out.info("aborted");
            }
        }
    }
    Ok(())
}

fn handle_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Application entry point.
///
/// Failures from [`run`] are reported through the output writer so
/// they render like every other CLI message.
fn main() {
    if let Err(e) = run() {
        StdoutWriter::new(false).error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load configuration, parse command-line arguments, and dispatch to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `ToolpackError` if configuration loading fails or any
/// command handler returns an error.
fn run() -> Result<()> {
    let config = ToolpackConfig::load()?;

    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;
    let out = StdoutWriter::new(quiet);

    match cli.get_command() {
        Commands::Tui => toolpack::app::run(&config)?,
        Commands::Calc { expression } => handle_calc(&expression, &out)?,
        Commands::Convert { value, from, to } => handle_convert(value, &from, &to, &out)?,
        Commands::Text { op, text } => handle_text(op, text, &out)?,
        Commands::B64 { direction, text } => handle_b64(direction, text, &out)?,
        Commands::Url { direction, text } => handle_url(direction, text, &out)?,
        Commands::Json { op, text } => handle_json(op, text, &out)?,
        Commands::Password {
            length,
            count,
            no_upper,
            no_digits,
            no_symbols,
            no_ambiguous,
        } => handle_password(
            length,
            count,
            no_upper,
            no_digits,
            no_symbols,
            no_ambiguous,
            &out,
        )?,
        Commands::Uuid { count } => handle_uuid(count, &out),
        Commands::Hash { algorithm, text } => handle_hash(algorithm, text, &out)?,
        Commands::Contrast {
            foreground,
            background,
        } => handle_contrast(&foreground, &background, &out)?,
        Commands::Resize {
            input,
            width,
            height,
            output,
            format,
            quality,
        } => handle_resize(&input, width, height, output, format, quality, &out)?,
        Commands::Notes { command } => handle_notes(&config, &command, quiet, &out)?,
        Commands::Completions { shell } => handle_completions(shell),
    }

    Ok(())
}
