//! One-line banner headers.

use std::io::Write;

use crate::border::BorderStyle;
use crate::error::{Error, Result};
use crate::frame::{render_box, BoxOptions};
use crate::markup::{self, Markup, Measure, Style};
use crate::palette;
use crate::wrap::{self, Align, WrapOptions, DEFAULT_WIDTH};

/// Token that ends a highlighted glyph.
const RESET: &str = "@07@";

/// Preset used by headers unless configured otherwise.
pub const DEFAULT_PRESET: &str = "pcdos2";

/// Highlight used by headers unless configured otherwise (`@0B@`).
pub const DEFAULT_HIGHLIGHT: &str = "@0B@";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub width: usize,
    /// When false every escape code is stripped from the result.
    pub use_colors: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            use_colors: true,
        }
    }
}

/// Compose a header: the title's first line, centered in a box whose
/// corners and side edges are tinted with `highlight`.
///
/// The result is rendered terminal text, rows joined with `\n`, with no
/// trailing newline.
///
/// # Errors
/// - `LayoutTooNarrow` if `width` leaves no room for a title.
/// - `NamedStyleNotFound` for an unknown preset.
/// - `InvalidMarkupToken` if the title holds a malformed token.
pub fn header(
    title: &str,
    preset: &str,
    highlight: Style,
    options: &HeaderOptions,
) -> Result<String> {
    let text_width = options.width as i64 - 4;
    if text_width <= 0 {
        return Err(Error::too_narrow("header title", text_width));
    }
    let text_width = text_width as usize;

    let first_line = title.lines().next().unwrap_or_default().trim();
    let clipped = Markup::parse(first_line)?.slice(0, text_width);
    let centered = wrap::fill(
        &clipped,
        &WrapOptions::new(text_width)
            .align(Align::Center)
            .measure(Measure::Visible),
    )?;

    let style = BorderStyle::named(preset)?.highlighted(&highlight.to_string(), RESET);
    let rows = render_box(
        &centered,
        &style,
        &BoxOptions {
            width: options.width,
            measure: Measure::Visible,
            ..Default::default()
        },
    )?;
    let rendered = markup::render(&rows.join("\n"))?;

    tracing::debug!(preset, width = options.width, colors = options.use_colors, "composed header");
    if options.use_colors {
        Ok(rendered)
    } else {
        Ok(palette::strip(&rendered))
    }
}

/// Write a header followed by a newline.
pub fn write_header<W: Write>(
    out: &mut W,
    title: &str,
    preset: &str,
    highlight: Style,
    options: &HeaderOptions,
) -> Result<()> {
    let text = header(title, preset, highlight, options)?;
    writeln!(out, "{text}")?;
    Ok(())
}
