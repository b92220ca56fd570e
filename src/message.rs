//! Colorized one-line diagnostics.
//!
//! A message is rendered as `*LEVEL* message [location]`, each part in its
//! own style. Deciding whether to print a message, and exiting afterwards,
//! is left to the caller.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::markup::{self, Channel, Style};
use crate::palette::Color;

/// Severity of a diagnostic, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Fatal,
    Warn,
    Info,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Fatal, Level::Warn, Level::Info, Level::Debug];

    pub fn name(self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Stock colors for this level.
    pub fn style(self) -> MessageStyle {
        use Color::*;
        match self {
            Level::Fatal => MessageStyle::new(
                pair(BrightRed, BrightYellow),
                pair(BrightRed, BrightWhite),
                pair(Black, BrightYellow),
            ),
            Level::Warn => MessageStyle::new(
                pair(BrightYellow, Black),
                pair(Black, BrightYellow),
                pair(Black, Yellow),
            ),
            Level::Info => MessageStyle::new(
                pair(Green, BrightWhite),
                pair(Black, BrightGreen),
                pair(Black, Green),
            ),
            Level::Debug => MessageStyle::new(
                pair(BrightBlack, BrightWhite),
                pair(Black, White),
                pair(Black, BrightWhite),
            ),
        }
    }
}

const fn pair(background: Color, foreground: Color) -> Style {
    Style {
        background: Channel::Set(background),
        foreground: Channel::Set(foreground),
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

/// Styles for the three parts of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStyle {
    pub level: Style,
    pub message: Style,
    pub location: Style,
}

impl MessageStyle {
    pub const fn new(level: Style, message: Style, location: Style) -> Self {
        Self {
            level,
            message,
            location,
        }
    }
}

/// Render a message with the level's stock colors.
pub fn format_message(level: Level, message: &str, location: Option<&str>) -> Result<String> {
    format_message_with(&level.style(), level, message, location)
}

/// Render a message with explicit colors.
///
/// The message and location may carry their own markup.
pub fn format_message_with(
    style: &MessageStyle,
    level: Level,
    message: &str,
    location: Option<&str>,
) -> Result<String> {
    let mut text = format!(
        "{}*{}*@07@ {}{message}@07@ ",
        style.level,
        level.name().to_ascii_uppercase(),
        style.message,
    );
    if let Some(location) = location {
        text.push_str(&format!("{}[{location}]", style.location));
    }
    markup::render(&text)
}

/// Write a rendered message followed by a newline.
pub fn write_message<W: Write>(
    out: &mut W,
    level: Level,
    message: &str,
    location: Option<&str>,
) -> Result<()> {
    let text = format_message(level, message, location)?;
    writeln!(out, "{text}")?;
    Ok(())
}
