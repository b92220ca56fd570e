//! Paragraph word wrap and alignment.
//!
//! Whitespace runs (line breaks included) collapse into single separators
//! and the text is treated as one flow of words. Words are packed greedily.
//! A word that cannot fit on a line of its own is hard-broken across lines.

use std::collections::VecDeque;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::markup::{Markup, Measure};

/// Default line width for wrapping and boxes.
pub const DEFAULT_WIDTH: usize = 76;

/// Horizontal alignment of wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    /// Left-pad every line to the full width.
    Right,
    /// Left-pad by half the slack; no padding on the right.
    Center,
    /// Stretch inter-word gaps so lines fill the width.
    Full,
}

/// Options for [`wrap`] and [`fill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum visible columns per line (at least 1).
    pub width: usize,
    /// Spaces before the first line only. Must be non-negative and less
    /// than `width`.
    pub indent: isize,
    pub align: Align,
    /// With [`Measure::Visible`] the whole text must be valid markup, even
    /// where no word is hard-broken.
    pub measure: Measure,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent: 0,
            align: Align::Left,
            measure: Measure::Raw,
        }
    }
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn indent(mut self, indent: isize) -> Self {
        self.indent = indent;
        self
    }

    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }
}

/// Wrap text into aligned lines.
///
/// # Errors
/// - `LayoutTooNarrow` when the width is zero, or the indent is negative or
///   leaves no column for text.
/// - `InvalidMarkupToken` under [`Measure::Visible`] if the text holds a
///   malformed token.
pub fn wrap(text: &str, options: &WrapOptions) -> Result<Vec<String>> {
    let width = options.width;
    if width == 0 {
        return Err(Error::too_narrow("wrap width", 0));
    }
    let indent = usize::try_from(options.indent)
        .map_err(|_| Error::too_narrow("negative indent", options.indent as i64))?;
    if indent >= width {
        return Err(Error::too_narrow("indent", width as i64 - indent as i64));
    }
    if options.measure == Measure::Visible {
        Markup::parse(text)?;
    }

    let lines = break_lines(text, width, indent, options.measure)?;
    let measure = options.measure;

    let aligned = match options.align {
        Align::Left => lines,
        Align::Right => lines
            .into_iter()
            .map(|line| pad_left(&line, width.saturating_sub(measure.len(&line))))
            .collect(),
        Align::Center => lines
            .into_iter()
            .map(|line| pad_left(&line, width.saturating_sub(measure.len(&line)) / 2))
            .collect(),
        Align::Full => lines
            .iter()
            .map(|line| justify(line, width, measure))
            .collect(),
    };

    tracing::trace!(width, lines = aligned.len(), align = ?options.align, "wrapped paragraph");
    Ok(aligned)
}

/// Wrap text and join the lines with `\n`.
pub fn fill(text: &str, options: &WrapOptions) -> Result<String> {
    Ok(wrap(text, options)?.join("\n"))
}

/// Greedy line breaking, before alignment.
fn break_lines(text: &str, width: usize, indent: usize, measure: Measure) -> Result<Vec<String>> {
    let mut words: VecDeque<String> = text.split_whitespace().map(str::to_string).collect();
    let mut lines = Vec::new();
    let mut line = " ".repeat(indent);
    let mut line_len = indent;
    let mut first = true;

    while let Some(word) = words.pop_front() {
        // The first word sits right after the indent; later words need a
        // separator whenever the line already has something on it.
        let spaced = !first && line_len > 0;
        first = false;
        let word_len = measure.len(&word) + usize::from(spaced);

        if word_len > width - 1 {
            let room = width.saturating_sub(line_len);
            if room == 0 {
                lines.push(mem::take(&mut line));
                line_len = 0;
                words.push_front(word);
                continue;
            }

            let piece = if spaced { format!(" {word}") } else { word };
            let (head, tail) = split_at_column(&piece, room, measure)?;
            tracing::trace!(room, word = %piece, "hard-breaking long word");

            line.push_str(&head);
            lines.push(mem::take(&mut line));
            line_len = 0;
            if !tail.is_empty() {
                words.push_front(tail);
            }
        } else if line_len + word_len > width {
            lines.push(mem::take(&mut line));
            line_len = measure.len(&word);
            line = word;
        } else {
            if spaced {
                line.push(' ');
            }
            line.push_str(&word);
            line_len += word_len;
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    Ok(lines)
}

/// Split text after `column` visible columns.
///
/// With [`Measure::Visible`] the split goes through the styled slicer, so no
/// token is cut in half and the tail re-opens the style active at the cut.
/// Tokens after the last visible character are carried over as well, so the
/// text that follows is drawn in the same style as before the split.
fn split_at_column(text: &str, column: usize, measure: Measure) -> Result<(String, String)> {
    match measure {
        Measure::Raw => {
            let byte = text
                .char_indices()
                .nth(column)
                .map_or(text.len(), |(i, _)| i);
            Ok((text[..byte].to_string(), text[byte..].to_string()))
        }
        Measure::Visible => {
            let markup = Markup::parse(text)?;
            let mut head = markup.slice(0, column);
            let mut tail = markup.slice(column, usize::MAX);

            let end = markup.end_style();
            let last = if tail.is_empty() { &mut head } else { &mut tail };
            if Markup::parse(last)?.end_style() != end {
                last.push_str(&end.to_string());
            }
            Ok((head, tail))
        }
    }
}

fn pad_left(line: &str, pad: usize) -> String {
    let mut out = " ".repeat(pad);
    out.push_str(line);
    out
}

/// Full justification of one line.
///
/// The slack is handed out gap by gap from the left, each gap taking
/// `ceil(slack_left / gaps_left)`. Earlier gaps therefore get the extra
/// spaces. A leading indent is kept as is.
fn justify(line: &str, width: usize, measure: Measure) -> String {
    if measure.len(line) >= width {
        return line.to_string();
    }

    let body = line.trim_start_matches(' ');
    let lead = &line[..line.len() - body.len()];
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.len() < 2 {
        return line.to_string();
    }

    let words_len: usize = words.iter().map(|w| measure.len(w)).sum();
    let mut remaining = width.saturating_sub(lead.len() + words_len);
    let mut gaps = words.len() - 1;

    let mut out = String::with_capacity(line.len() + remaining);
    out.push_str(lead);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let fill = (remaining + gaps - 1) / gaps;
            out.extend(std::iter::repeat(' ').take(fill));
            remaining -= fill;
            gaps -= 1;
        }
        out.push_str(word);
    }
    out
}
