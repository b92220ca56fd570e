//! Border lines and framed boxes.

use serde::{Deserialize, Serialize};

use crate::border::BorderStyle;
use crate::error::{Error, Result};
use crate::markup::{Markup, Measure};
use crate::wrap::{self, WrapOptions, DEFAULT_WIDTH};

/// Blank cells between the border and the content, per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 0,
            right: 1,
            bottom: 0,
            left: 1,
        }
    }
}

impl From<[usize; 4]> for Padding {
    /// `[top, right, bottom, left]`, clockwise like CSS.
    fn from([top, right, bottom, left]: [usize; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Options for [`render_box`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Total width, borders included.
    pub width: usize,
    /// Rewrap paragraph lines to the inner width.
    pub reflow: bool,
    /// Leave out the right border and right padding.
    ///
    /// Rows then end where their content ends, with no trailing spaces.
    /// Blank padding rows follow suit and hold only the left edge.
    pub omit_right: bool,
    pub padding: Padding,
    pub measure: Measure,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            reflow: false,
            omit_right: false,
            padding: Padding::default(),
            measure: Measure::Raw,
        }
    }
}

/// A full-width line: left corner, tiled edge, right corner.
///
/// The edge is repeated until it covers the space between the corners and
/// then cut to exactly that many columns with the styled slicer, so a
/// multi-character or tokenized edge is never split mid-token.
///
/// # Errors
/// `LayoutTooNarrow` when the corners alone are wider than `width`.
pub fn border_line(
    width: usize,
    left: &str,
    edge: &str,
    right: &str,
    measure: Measure,
) -> Result<String> {
    let middle = width as i64 - measure.len(left) as i64 - measure.len(right) as i64;
    if middle < 0 {
        return Err(Error::too_narrow("border line", middle));
    }
    let middle = middle as usize;

    let edge_len = measure.len(edge);
    let fill = if middle == 0 || edge_len == 0 {
        String::new()
    } else {
        let tiled = edge.repeat((middle + edge_len - 1) / edge_len);
        Markup::parse(&tiled)?.slice(0, middle)
    };

    Ok(format!("{left}{fill}{right}"))
}

/// The top line of a named preset.
pub fn named_border_line(width: usize, name: &str, measure: Measure) -> Result<String> {
    BorderStyle::named(name)?.top_line(width, measure)
}

impl BorderStyle {
    pub fn top_line(&self, width: usize, measure: Measure) -> Result<String> {
        border_line(
            width,
            &self.corner_top_left,
            &self.edge_top,
            &self.corner_top_right,
            measure,
        )
    }

    pub fn bottom_line(&self, width: usize, measure: Measure) -> Result<String> {
        border_line(
            width,
            &self.corner_bottom_left,
            &self.edge_bottom,
            &self.corner_bottom_right,
            measure,
        )
    }
}

/// Frame text in a box.
///
/// Content lines are split on `\n`. Lines longer than the inner width are
/// not truncated; they push the right border out.
///
/// # Errors
/// `LayoutTooNarrow` when the borders and padding leave no room for content,
/// or when the corners do not fit on the border lines. Markup errors from
/// the glyphs or from reflowed text are passed through.
pub fn render_box(text: &str, style: &BorderStyle, options: &BoxOptions) -> Result<Vec<String>> {
    let measure = options.measure;
    let width = options.width;
    let padding = options.padding;
    let left_len = measure.len(&style.edge_left);
    let right_len = measure.len(&style.edge_right);

    let mut inner = width as i64 - left_len as i64 - padding.left as i64;
    if !options.omit_right {
        inner -= (right_len + padding.right) as i64;
    }
    if inner <= 0 {
        return Err(Error::too_narrow("box inner width", inner));
    }
    let inner = inner as usize;

    let content = if options.reflow {
        reflow(text, inner, measure)?
    } else {
        text.split('\n').map(str::to_string).collect()
    };

    let blank_row = if options.omit_right {
        style.edge_left.to_string()
    } else {
        let gap = width.saturating_sub(left_len + right_len);
        format!("{}{}{}", style.edge_left, " ".repeat(gap), style.edge_right)
    };
    let left_pad = " ".repeat(padding.left);

    let mut rows = Vec::with_capacity(content.len() + padding.top + padding.bottom + 2);
    rows.push(style.top_line(width, measure)?);
    rows.extend(std::iter::repeat(blank_row.clone()).take(padding.top));

    for line in &content {
        let mut row = format!("{}{left_pad}{line}", style.edge_left);
        if !options.omit_right {
            let used = measure.len(&row) + padding.right + right_len;
            let fill = width.saturating_sub(used) + padding.right;
            row.extend(std::iter::repeat(' ').take(fill));
            row.push_str(&style.edge_right);
        }
        rows.push(row);
    }

    rows.extend(std::iter::repeat(blank_row).take(padding.bottom));
    rows.push(style.bottom_line(width, measure)?);

    tracing::debug!(
        width,
        inner,
        rows = rows.len(),
        reflow = options.reflow,
        "rendered box"
    );
    Ok(rows)
}

/// [`render_box`] with a named preset.
pub fn render_named_box(text: &str, name: &str, options: &BoxOptions) -> Result<Vec<String>> {
    render_box(text, &BorderStyle::named(name)?, options)
}

/// Rewrap runs of paragraph lines to `width`.
///
/// Blank lines and lines starting with whitespace end the current
/// paragraph and are kept as they are.
fn reflow(text: &str, width: usize, measure: Measure) -> Result<Vec<String>> {
    let options = WrapOptions::new(width).measure(measure);
    let mut out = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let verbatim = measure.len(line) == 0 || line.starts_with(char::is_whitespace);
        if !verbatim {
            paragraph.push(line);
            continue;
        }
        if !paragraph.is_empty() {
            out.extend(wrap::wrap(&paragraph.join(" "), &options)?);
            paragraph.clear();
        }
        out.push(line.to_string());
    }
    if !paragraph.is_empty() {
        out.extend(wrap::wrap(&paragraph.join(" "), &options)?);
    }

    tracing::trace!(width, lines = out.len(), "reflowed box content");
    Ok(out)
}
