//! `@BF@` color markup.
//!
//! Markup is ordinary text with embedded four-character tokens. `B` selects
//! the background and `F` the foreground, each as a hex palette index or `X`
//! for "leave this channel alone". A token applies to everything after it up
//! to the next token. Text before the first token carries no style.
//!
//! A markup string is parsed once into an ordered list of [`Run`]s over its
//! plain text. Rendering, slicing and measuring all work from that list.

mod render;
mod slice;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::palette::Color;

pub use render::render;
pub use slice::slice;

/// Length in bytes of a markup token.
const TOKEN_LEN: usize = 4;

/// What a token does to one color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    /// Emit nothing; whatever the terminal shows for this channel stays.
    #[default]
    Unchanged,
    /// Switch the channel to a palette color.
    Set(Color),
}

impl Channel {
    /// Parse a single token nibble (`0-9`, `a-f`, `A-F`, `x`, `X`).
    pub fn from_nibble(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Channel::Unchanged),
            _ => c
                .to_digit(16)
                .and_then(|d| Color::from_index(d as u8))
                .map(Channel::Set),
        }
    }

    /// The upper-case nibble for this channel.
    pub fn nibble(self) -> char {
        match self {
            Channel::Unchanged => 'X',
            Channel::Set(color) => color.nibble(),
        }
    }
}

/// The background/foreground pair selected by a markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub background: Channel,
    pub foreground: Channel,
}

impl Style {
    /// Style of text before any token (`@XX@`).
    pub const UNSTYLED: Style = Style {
        background: Channel::Unchanged,
        foreground: Channel::Unchanged,
    };

    pub fn new(background: Channel, foreground: Channel) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// A style that only sets the foreground.
    pub fn fg(color: Color) -> Self {
        Self::new(Channel::Unchanged, Channel::Set(color))
    }

    /// Apply this style to a piece of plain text.
    ///
    /// The background wraps the text first and the foreground wraps the
    /// result, so the foreground codes are outermost.
    pub fn paint(&self, text: &str) -> String {
        let with_bg = match self.background {
            Channel::Unchanged => text.to_string(),
            Channel::Set(color) => color.bg(text),
        };
        match self.foreground {
            Channel::Unchanged => with_bg,
            Channel::Set(color) => color.fg(&with_bg),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}{}@", self.background.nibble(), self.foreground.nibble())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parse a complete `@BF@` token.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMarkupToken {
            token: s.to_string(),
            offset: 0,
        };
        match scan_token(s.as_bytes(), 0) {
            Some(Token::Valid(style)) if s.len() == TOKEN_LEN => Ok(style),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Style {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of looking for a token at a byte position.
enum Token {
    Valid(Style),
    /// `@`, two alphanumerics, `@`, but not a palette nibble pair.
    Invalid,
}

/// Check whether a token starts at `pos`.
///
/// Only ASCII bytes are inspected, so `pos + 4` is always a char boundary
/// when a token is found.
fn scan_token(bytes: &[u8], pos: usize) -> Option<Token> {
    let candidate = bytes.get(pos..pos + TOKEN_LEN)?;
    if candidate[0] != b'@' || candidate[3] != b'@' {
        return None;
    }
    let (b, f) = (candidate[1], candidate[2]);
    if !b.is_ascii_alphanumeric() || !f.is_ascii_alphanumeric() {
        return None;
    }
    match (
        Channel::from_nibble(char::from(b)),
        Channel::from_nibble(char::from(f)),
    ) {
        (Some(background), Some(foreground)) => Some(Token::Valid(Style {
            background,
            foreground,
        })),
        _ => Some(Token::Invalid),
    }
}

/// A maximal span of plain text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// First visible column of the run.
    pub start: usize,
    /// Number of visible columns.
    pub len: usize,
    pub style: Style,
    bytes: Range<usize>,
}

impl Run {
    /// One past the last visible column of the run.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A parsed markup string: its plain text and the runs covering it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    plain: String,
    runs: Vec<Run>,
    /// Style after the last token, even one with no text behind it.
    end_style: Style,
}

impl Markup {
    /// Parse markup, rejecting malformed tokens.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let mut markup = Markup {
            plain: String::with_capacity(text.len()),
            runs: Vec::new(),
            end_style: Style::UNSTYLED,
        };
        let mut style = Style::UNSTYLED;
        let mut run_start_byte = 0;
        let mut run_start_col = 0;
        let mut col = 0;
        let mut pos = 0;

        while pos < text.len() {
            match scan_token(bytes, pos) {
                Some(Token::Valid(next)) => {
                    markup.close_run(style, run_start_col, col, run_start_byte);
                    style = next;
                    run_start_col = col;
                    run_start_byte = markup.plain.len();
                    pos += TOKEN_LEN;
                }
                Some(Token::Invalid) => {
                    let token = text[pos..pos + TOKEN_LEN].to_string();
                    tracing::debug!(%token, offset = pos, "rejected markup token");
                    return Err(Error::InvalidMarkupToken { token, offset: pos });
                }
                None => {
                    // Not a token, so copy one whole character.
                    let c = text[pos..].chars().next().unwrap_or_default();
                    markup.plain.push(c);
                    pos += c.len_utf8();
                    col += 1;
                }
            }
        }
        markup.close_run(style, run_start_col, col, run_start_byte);
        markup.end_style = style;

        Ok(markup)
    }

    fn close_run(&mut self, style: Style, start: usize, end: usize, start_byte: usize) {
        if end > start {
            self.runs.push(Run {
                start,
                len: end - start,
                style,
                bytes: start_byte..self.plain.len(),
            });
        }
    }

    /// The text with every token removed.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Plain text covered by one of this markup's runs.
    pub fn run_text(&self, run: &Run) -> &str {
        &self.plain[run.bytes.clone()]
    }

    /// The style in effect at the end of the text.
    ///
    /// Trailing tokens leave no run behind, but they still decide how
    /// whatever follows this text is drawn.
    pub fn end_style(&self) -> Style {
        self.end_style
    }

    /// Number of visible columns.
    pub fn visible_len(&self) -> usize {
        self.runs.last().map_or(0, Run::end)
    }
}

/// Count the characters left after removing every valid token.
///
/// Malformed token candidates count as ordinary text here.
pub fn plain_length(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(Token::Valid(_)) = scan_token(bytes, pos) {
            pos += TOKEN_LEN;
            continue;
        }
        let c = text[pos..].chars().next().unwrap_or_default();
        pos += c.len_utf8();
        count += 1;
    }
    count
}

/// How line lengths are measured during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Every character counts, tokens included.
    #[default]
    Raw,
    /// Tokens are invisible and count as zero columns.
    Visible,
}

impl Measure {
    pub fn len(self, text: &str) -> usize {
        match self {
            Measure::Raw => text.chars().count(),
            Measure::Visible => plain_length(text),
        }
    }
}
