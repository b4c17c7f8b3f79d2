//! Image resizing: probe dimensions, scale with an optional aspect
//! lock, and re-encode as PNG or JPEG.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use byte_unit::{Byte, UnitType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, ImageFormat, ImageReader};
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

/// Errors from image probing and resizing.
#[derive(Debug, Error)]
pub enum ImageToolError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The image crate rejected the file
    #[error("image error: {0}")]
    Decode(#[from] image::ImageError),
    /// Output file could not be created
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Target dimensions were zero
    #[error("target dimensions must be at least 1x1")]
    ZeroDimensions,
}

/// JPEG quality used when nothing overrides it.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// What a probe learned about an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

impl ImageInfo {
    /// `1920x1080, 2.4 MiB` style summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let size = Byte::from_u64(self.bytes)
            .get_appropriate_unit(UnitType::Binary)
            .to_string();
        format!("{}x{}, {size}", self.width, self.height)
    }
}

/// Output encodings the resizer can write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::Png => Self::Jpeg,
            Self::Jpeg => Self::Png,
        }
    }
}

/// Read dimensions and file size without decoding pixel data.
///
/// # Errors
///
/// Returns `ImageToolError` if the file is unreadable or not an image.
pub fn probe(path: &Path) -> Result<ImageInfo, ImageToolError> {
    let metadata = std::fs::metadata(path).map_err(|source| ImageToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = image::image_dimensions(path)?;
    Ok(ImageInfo {
        width,
        height,
        bytes: metadata.len(),
    })
}

/// Fit `(width, height)` to a target width, preserving aspect ratio.
/// Never returns a zero dimension.
#[must_use]
pub fn scale_to_width(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    if width == 0 || height == 0 || target_width == 0 {
        return (target_width.max(1), 1);
    }
    let scaled = (f64::from(target_width) * f64::from(height) / f64::from(width)).round() as u32;
    (target_width, scaled.max(1))
}

/// Resize `input` to exactly `width` x `height` and write it next to
/// the target path in the requested format. `quality` (1-100) applies
/// to JPEG output only.
///
/// # Errors
///
/// Returns `ImageToolError` on I/O or codec failure, or when the
/// target dimensions are zero.
pub fn resize_file(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    format: OutputFormat,
    quality: u8,
) -> Result<ImageInfo, ImageToolError> {
    if width == 0 || height == 0 {
        return Err(ImageToolError::ZeroDimensions);
    }
    let img = ImageReader::open(input)
        .map_err(|source| ImageToolError::Read {
            path: input.to_path_buf(),
            source,
        })?
        .decode()?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    match format {
        OutputFormat::Jpeg => {
            let file = File::create(output).map_err(|source| ImageToolError::Write {
                path: output.to_path_buf(),
                source,
            })?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));
            // JPEG has no alpha channel
            resized.to_rgb8().write_with_encoder(encoder)?;
        }
        OutputFormat::Png => resized.save_with_format(output, ImageFormat::Png)?,
    }
    probe(output)
}

/// Derive `photo.1280.png` from `photo.jpg` and a target width.
#[must_use]
pub fn output_path(input: &Path, width: u32, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "resized".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}.{width}.{}", format.extension()))
}

/// Image resize panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageField {
    Path,
    Width,
    Height,
    Quality,
}

#[derive(Debug)]
pub struct ImageTool {
    path: TextField,
    width: TextField,
    height: TextField,
    quality: TextField,
    info: Option<ImageInfo>,
    format: OutputFormat,
    aspect_lock: bool,
    status: Option<String>,
    active: ImageField,
}

impl Default for ImageTool {
    fn default() -> Self {
        Self {
            path: TextField::new(),
            width: TextField::with_text("1280"),
            height: TextField::new(),
            quality: TextField::with_text(DEFAULT_JPEG_QUALITY.to_string()),
            info: None,
            format: OutputFormat::Png,
            aspect_lock: true,
            status: None,
            active: ImageField::Path,
        }
    }
}

impl ImageTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle the active field, skipping the height field while the
    /// aspect lock computes it and the quality field for PNG output.
    fn next_field(&mut self) {
        self.active = match self.active {
            ImageField::Path => ImageField::Width,
            ImageField::Width if !self.aspect_lock => ImageField::Height,
            ImageField::Width | ImageField::Height => {
                if self.format == OutputFormat::Jpeg {
                    ImageField::Quality
                } else {
                    ImageField::Path
                }
            }
            ImageField::Quality => ImageField::Path,
        };
    }

    fn target_size(&self) -> Option<(u32, u32)> {
        let info = self.info.as_ref()?;
        let width: u32 = self.width.text().trim().parse().ok().filter(|w| *w > 0)?;
        if self.aspect_lock {
            return Some(scale_to_width(info.width, info.height, width));
        }
        let height: u32 = self.height.text().trim().parse().ok().filter(|h| *h > 0)?;
        Some((width, height))
    }

    fn quality_value(&self) -> Option<u8> {
        self.quality
            .text()
            .trim()
            .parse()
            .ok()
            .filter(|q| (1..=100).contains(q))
    }

    fn run_resize(&mut self) {
        let input = PathBuf::from(self.path.text().trim());
        let Some((width, height)) = self.target_size() else {
            self.status = Some("load an image and enter the target size first".to_string());
            return;
        };
        let Some(quality) = self.quality_value() else {
            self.status = Some("quality must be between 1 and 100".to_string());
            return;
        };
        let output = output_path(&input, width, self.format);
        self.status = Some(
            match resize_file(&input, &output, width, height, self.format, quality) {
                Ok(info) => format!("wrote {} ({})", output.display(), info.summary()),
                Err(e) => e.to_string(),
            },
        );
    }
}

impl Tool for ImageTool {
    fn id(&self) -> &'static str {
        "image"
    }

    fn label(&self) -> &'static str {
        "Image Resizer"
    }

    fn keywords(&self) -> &'static str {
        "image resize scale png jpeg picture"
    }

    fn handle_key(&mut self, key: KeyEvent) -> ToolEvent {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => {
                self.next_field();
                ToolEvent::Redraw
            }
            (KeyCode::Enter, _) => {
                let path = PathBuf::from(self.path.text().trim());
                match probe(&path) {
                    Ok(info) => {
                        if self.height.text().is_empty() {
                            self.height.set_text(info.height.to_string());
                        }
                        self.info = Some(info);
                        self.status = None;
                    }
                    Err(e) => {
                        self.info = None;
                        self.status = Some(e.to_string());
                    }
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('f'), KeyModifiers::ALT) => {
                self.format = self.format.toggle();
                if self.format == OutputFormat::Png && self.active == ImageField::Quality {
                    self.active = ImageField::Path;
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('a'), KeyModifiers::ALT) => {
                self.aspect_lock = !self.aspect_lock;
                if self.aspect_lock && self.active == ImageField::Height {
                    self.active = ImageField::Width;
                }
                ToolEvent::Redraw
            }
            (KeyCode::Char('r'), KeyModifiers::ALT) => {
                self.run_resize();
                ToolEvent::Redraw
            }
            _ => {
                let field = match self.active {
                    ImageField::Path => &mut self.path,
                    ImageField::Width => &mut self.width,
                    ImageField::Height => &mut self.height,
                    ImageField::Quality => &mut self.quality,
                };
                if field.handle_key(key) {
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
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            self.path
                .widget("Image path", theme, focused && self.active == ImageField::Path),
            rows[0],
        );

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(rows[1]);
        frame.render_widget(
            self.width
                .widget("Width", theme, focused && self.active == ImageField::Width),
            fields[0],
        );
        frame.render_widget(
            self.height.widget(
                if self.aspect_lock { "Height (auto)" } else { "Height" },
                theme,
                focused && self.active == ImageField::Height,
            ),
            fields[1],
        );
        frame.render_widget(
            self.quality.widget(
                "JPEG quality",
                theme,
                focused && self.active == ImageField::Quality,
            ),
            fields[2],
        );

        let source = self.info.as_ref().map_or_else(
            || Line::from(Span::styled("press Enter to load", theme.dimmed_style())),
            |info| {
                Line::from(vec![
                    Span::raw("Source: "),
                    Span::styled(info.summary(), theme.result_style()),
                ])
            },
        );
        frame.render_widget(Paragraph::new(source), rows[2]);

        let mut settings = vec![
            Span::raw("Format: "),
            Span::styled(self.format.name(), theme.result_style()),
            Span::raw("  Aspect lock: "),
            Span::styled(
                if self.aspect_lock { "on" } else { "off" },
                theme.result_style(),
            ),
        ];
        if let Some((w, h)) = self.target_size() {
            settings.push(Span::raw(format!("  Target: {w}x{h}")));
        }
        frame.render_widget(Paragraph::new(Line::from(settings)), rows[3]);

        if let Some(status) = &self.status {
            let style = if status.starts_with("wrote") {
                theme.success_style()
            } else {
                theme.error_style()
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(status.as_str(), style))),
                rows[4],
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Enter load  Tab field  Alt+f format  Alt+a aspect  Alt+r resize",
                theme.dimmed_style(),
            ))),
            rows[5],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_width_preserves_aspect() {
        assert_eq!(scale_to_width(1920, 1080, 960), (960, 540));
        assert_eq!(scale_to_width(100, 100, 50), (50, 50));
    }

    #[test]
    fn test_scale_to_width_never_zero() {
        assert_eq!(scale_to_width(10_000, 1, 10), (10, 1));
    }

    #[test]
    fn test_output_path_shape() {
        let out = output_path(Path::new("/tmp/photo.jpg"), 640, OutputFormat::Png);
        assert_eq!(out, PathBuf::from("/tmp/photo.640.png"));
    }

    #[test]
    fn test_probe_missing_file() {
        assert!(probe(Path::new("/nonexistent/image.png")).is_err());
    }

    #[test]
    fn test_resize_rejects_zero() {
        let err = resize_file(
            Path::new("a.png"),
            Path::new("b.png"),
            0,
            10,
            OutputFormat::Png,
            DEFAULT_JPEG_QUALITY,
        )
        .unwrap_err();
        assert!(matches!(err, ImageToolError::ZeroDimensions));
    }

    #[test]
    fn test_resize_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let img = image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]));
        img.save(&input).unwrap();

        let output = dir.path().join("out.png");
        let info = resize_file(&input, &output, 4, 2, OutputFormat::Png, DEFAULT_JPEG_QUALITY)
            .unwrap();
        assert_eq!((info.width, info.height), (4, 2));
    }

    #[test]
    fn test_jpeg_quality_changes_output_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        // High-frequency pattern so JPEG quality actually costs bytes.
        let img = image::RgbImage::from_fn(64, 64, |x, y| {
            image::Rgb([
                ((x * 31 + y * 17) % 256) as u8,
                ((x * 13) ^ (y * 7)) as u8,
                ((x + y * 29) % 256) as u8,
            ])
        });
        img.save(&input).unwrap();

        let low = resize_file(
            &input,
            &dir.path().join("low.jpg"),
            64,
            64,
            OutputFormat::Jpeg,
            10,
        )
        .unwrap();
        let high = resize_file(
            &input,
            &dir.path().join("high.jpg"),
            64,
            64,
            OutputFormat::Jpeg,
            95,
        )
        .unwrap();
        assert!(low.bytes < high.bytes);
    }

    #[test]
    fn test_explicit_height_overrides_aspect() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let img = image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]));
        img.save(&input).unwrap();

        let output = dir.path().join("out.png");
        let info = resize_file(&input, &output, 6, 5, OutputFormat::Png, DEFAULT_JPEG_QUALITY)
            .unwrap();
        assert_eq!((info.width, info.height), (6, 5));
    }

    #[test]
    fn test_field_cycle_skips_inactive_inputs() {
        let mut tool = ImageTool::new();
        // PNG + aspect lock: height and quality are skipped.
        tool.next_field();
        assert_eq!(tool.active, ImageField::Width);
        tool.next_field();
        assert_eq!(tool.active, ImageField::Path);

        tool.aspect_lock = false;
        tool.format = OutputFormat::Jpeg;
        tool.next_field();
        tool.next_field();
        assert_eq!(tool.active, ImageField::Height);
        tool.next_field();
        assert_eq!(tool.active, ImageField::Quality);
        tool.next_field();
        assert_eq!(tool.active, ImageField::Path);
    }

    #[test]
    fn test_panel_quality_bounds() {
        let mut tool = ImageTool::new();
        assert_eq!(tool.quality_value(), Some(DEFAULT_JPEG_QUALITY));
        tool.quality.set_text("0");
        assert_eq!(tool.quality_value(), None);
        tool.quality.set_text("101");
        assert_eq!(tool.quality_value(), None);
        tool.quality.set_text("85");
        assert_eq!(tool.quality_value(), Some(85));
    }
}
