//! The 16-color palette and its SGR escape codes.
//!
//! Each palette entry can wrap text as a foreground or background color.
//! Wrapping follows the usual "open, text, close" shape:
//! - empty text stays empty
//! - a close code already inside the text is re-opened after it
//! - line breaks are closed before and re-opened after, so a color never
//!   bleeds into the next line
//!
//! [`strip`] removes every escape sequence again.

use vte::{Parser, Perform};

/// One of the 16 palette colors, in markup nibble order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    BrightBlack,
    BrightBlue,
    BrightGreen,
    BrightCyan,
    BrightRed,
    BrightMagenta,
    BrightYellow,
    BrightWhite,
}

/// Every color, indexed by its markup nibble.
pub const COLORS: [Color; 16] = [
    Color::Black,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::White,
    Color::BrightBlack,
    Color::BrightBlue,
    Color::BrightGreen,
    Color::BrightCyan,
    Color::BrightRed,
    Color::BrightMagenta,
    Color::BrightYellow,
    Color::BrightWhite,
];

/// SGR code that restores the default foreground.
pub const FG_CLOSE: &str = "\x1b[39m";
/// SGR code that restores the default background.
pub const BG_CLOSE: &str = "\x1b[49m";

impl Color {
    /// Look up a color by its markup nibble (0-15).
    pub fn from_index(index: u8) -> Option<Self> {
        COLORS.get(usize::from(index)).copied()
    }

    /// The markup nibble (0-15) for this color.
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Cyan => 3,
            Color::Red => 4,
            Color::Magenta => 5,
            Color::Yellow => 6,
            Color::White => 7,
            Color::BrightBlack => 8,
            Color::BrightBlue => 9,
            Color::BrightGreen => 10,
            Color::BrightCyan => 11,
            Color::BrightRed => 12,
            Color::BrightMagenta => 13,
            Color::BrightYellow => 14,
            Color::BrightWhite => 15,
        }
    }

    /// Upper-case hex digit used for this color in markup.
    pub fn nibble(self) -> char {
        char::from_digit(u32::from(self.index()), 16)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('0')
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Offset of the base color within an SGR block (black=0 .. white=7).
    fn sgr_offset(self) -> u8 {
        match self {
            Color::Black | Color::BrightBlack => 0,
            Color::Red | Color::BrightRed => 1,
            Color::Green | Color::BrightGreen => 2,
            Color::Yellow | Color::BrightYellow => 3,
            Color::Blue | Color::BrightBlue => 4,
            Color::Magenta | Color::BrightMagenta => 5,
            Color::Cyan | Color::BrightCyan => 6,
            Color::White | Color::BrightWhite => 7,
        }
    }

    /// SGR code selecting this color as foreground.
    pub fn fg_open(self) -> String {
        let base = if self.is_bright() { 90 } else { 30 };
        format!("\x1b[{}m", base + self.sgr_offset())
    }

    /// SGR code selecting this color as background.
    pub fn bg_open(self) -> String {
        let base = if self.is_bright() { 100 } else { 40 };
        format!("\x1b[{}m", base + self.sgr_offset())
    }

    /// Wrap text in this foreground color.
    pub fn fg(self, text: &str) -> String {
        wrap(&self.fg_open(), FG_CLOSE, text)
    }

    /// Wrap text in this background color.
    pub fn bg(self, text: &str) -> String {
        wrap(&self.bg_open(), BG_CLOSE, text)
    }
}

/// Wrap text between an open and a close code.
fn wrap(open: &str, close: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let reopened = format!("{close}{open}");
    let body = text.replace(close, &reopened);

    let mut out = String::with_capacity(body.len() + open.len() + close.len());
    out.push_str(open);
    out.push_str(&body);
    out.push_str(close);

    if out.contains('\n') {
        close_around_newlines(&out, open, close)
    } else {
        out
    }
}

/// Surround every `\r*\n` run with `close` before and `open` after.
fn close_around_newlines(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut pending_cr = 0;

    for c in text.chars() {
        match c {
            '\r' => pending_cr += 1,
            '\n' => {
                out.push_str(close);
                out.extend(std::iter::repeat('\r').take(pending_cr));
                out.push('\n');
                out.push_str(open);
                pending_cr = 0;
            }
            _ => {
                out.extend(std::iter::repeat('\r').take(pending_cr));
                pending_cr = 0;
                out.push(c);
            }
        }
    }
    out.extend(std::iter::repeat('\r').take(pending_cr));
    out
}

/// Collects printable output and line controls, dropping escape sequences.
struct Stripper {
    out: String,
}

impl Perform for Stripper {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if matches!(byte, b'\n' | b'\r' | b'\t') {
            self.out.push(char::from(byte));
        }
    }
}

/// Remove all terminal escape sequences from a string.
pub fn strip(text: &str) -> String {
    let mut parser = Parser::new();
    let mut stripper = Stripper {
        out: String::with_capacity(text.len()),
    };
    parser.advance(&mut stripper, text.as_bytes());
    stripper.out
}

/// Markup lines showing every background/foreground pairing.
///
/// Line `n` uses background `n`; each cell is `@BF@ BF ` and the line ends
/// with `@07@`.
pub fn swatch() -> Vec<String> {
    COLORS
        .iter()
        .map(|bg| {
            let mut line = String::with_capacity(16 * 8 + 4);
            for fg in COLORS {
                let (b, f) = (bg.nibble(), fg.nibble());
                line.push_str(&format!("@{b}{f}@ {b}{f} "));
            }
            line.push_str("@07@");
            line
        })
        .collect()
}
