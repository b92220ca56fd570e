//! Layout defaults loaded from a TOML file.
//!
//! Every field is optional in the file; anything left out takes the stock
//! default. A missing file is the same as an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::border::{BorderSpec, BorderStyle};
use crate::frame::{border_line, BoxOptions, Padding};
use crate::header::{HeaderOptions, DEFAULT_PRESET};
use crate::markup::{Channel, Measure, Style};
use crate::palette::Color;
use crate::wrap::{Align, WrapOptions, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub indent: isize,
    pub align: Align,
    pub measure: Measure,
    /// Preset name or eight glyphs.
    pub border: BorderSpec,
    pub reflow: bool,
    pub omit_right: bool,
    /// Glyph tiled across horizontal rules.
    pub separator: String,
    pub padding: Padding,
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub preset: String,
    pub highlight: Style,
    pub use_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent: 0,
            align: Align::Left,
            measure: Measure::Raw,
            border: BorderSpec::default(),
            reflow: false,
            omit_right: false,
            separator: "-".to_string(),
            padding: Padding::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            highlight: Style::new(Channel::Set(Color::Black), Channel::Set(Color::BrightCyan)),
            use_colors: true,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Load a config file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the config from [`Config::config_path`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// `<config dir>/atmark/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("atmark").join("config.toml"))
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            width: self.width,
            indent: self.indent,
            align: self.align,
            measure: self.measure,
        }
    }

    pub fn box_options(&self) -> BoxOptions {
        BoxOptions {
            width: self.width,
            reflow: self.reflow,
            omit_right: self.omit_right,
            padding: self.padding,
            measure: self.measure,
        }
    }

    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            width: self.width,
            use_colors: self.header.use_colors,
        }
    }

    pub fn border_style(&self) -> crate::Result<BorderStyle> {
        self.border.resolve()
    }

    /// A full-width rule of the separator glyph.
    pub fn rule(&self) -> crate::Result<String> {
        border_line(self.width, "", &self.separator, "", self.measure)
    }
}
