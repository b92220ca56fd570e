//! Border glyph sets and the named presets.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The eight glyphs framing a box.
///
/// Glyphs may be several characters wide and may carry markup tokens. The
/// visible widths of `edge_left` and `edge_right` decide how much room a box
/// leaves for content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderStyle {
    pub corner_top_left: Cow<'static, str>,
    pub edge_top: Cow<'static, str>,
    pub corner_top_right: Cow<'static, str>,
    pub edge_right: Cow<'static, str>,
    pub corner_bottom_right: Cow<'static, str>,
    pub edge_bottom: Cow<'static, str>,
    pub corner_bottom_left: Cow<'static, str>,
    pub edge_left: Cow<'static, str>,
}

/// Glyphs in positional order: TL, T, TR, R, BR, B, BL, L.
type Glyphs = [&'static str; 8];

const PRESETS: &[(&str, Glyphs)] = &[
    ("basic", ["=", "=", "=", "=", "=", "=", "=", "="]),
    ("ascii", ["+", "-", "+", "|", "+", "-", "+", "|"]),
    ("pcdos1", ["┌", "─", "┐", "│", "┘", "─", "└", "│"]),
    ("pcdos2", ["╔", "═", "╗", "║", "╝", "═", "╚", "║"]),
    // Line-comment framed variants
    ("lc-ascii-gap", ["// +", "-", "+", "|", "+", "-", "// +", "// |"]),
    ("lc-ascii-nogap", ["//+", "-", "+", "|", "+", "-", "//+", "//|"]),
    ("lc-pcdos1-gap", ["// ┌", "─", "┐", "│", "┘", "─", "// └", "// │"]),
    ("lc-pcdos1-nogap", ["//┌", "─", "┐", "│", "┘", "─", "//└", "//│"]),
    ("lc-pcdos2-gap", ["// ╔", "═", "╗", "║", "╝", "═", "// ╚", "// ║"]),
    ("lc-pcdos2-nogap", ["//╔", "═", "╗", "║", "╝", "═", "//╚", "//║"]),
    ("lc-open-dash", ["//-", "-", "-", "", "-", "-", "//-", "//"]),
    ("lc-open-dash-eq", ["//=", "-=", "-", "", "-", "-=", "//=", "//"]),
    ("lc-open-equal", ["//=", "=", "=", "", "=", "=", "//=", "//"]),
    ("lc-open-eq-id", ["//≡", "=≡", "=", "", "=", "=≡", "//≡", "//"]),
    ("lc-open-ident", ["//≡", "≡", "≡", "", "≡", "≡", "//≡", "//"]),
    ("lc-open-hash", ["//#", "#", "#", "", "#", "#", "//#", "//"]),
    ("lc-open-at", ["//@", "@", "@", "", "@", "@", "//@", "//"]),
    ("lc-closed-dash", ["//-", "-", "-", "-", "-", "-", "//-", "//-"]),
    ("lc-closed-dash-eq", ["//=", "-=", "-", "=", "-", "-=", "//=", "//="]),
    ("lc-closed-equal", ["//=", "=", "=", "=", "=", "=", "//=", "//="]),
    ("lc-closed-eq-id", ["//≡", "=≡", "=", "≡", "=", "=≡", "//≡", "//≡"]),
    ("lc-closed-ident", ["//≡", "≡", "≡", "≡", "≡", "≡", "//≡", "//≡"]),
    ("lc-closed-hash", ["//#", "#", "#", "#", "#", "#", "//#", "//#"]),
    ("lc-closed-at", ["//@", "@", "@", "@", "@", "@", "//@", "//@"]),
];

impl BorderStyle {
    pub const BASIC: BorderStyle = BorderStyle::from_static(PRESETS[0].1);
    pub const ASCII: BorderStyle = BorderStyle::from_static(PRESETS[1].1);
    pub const PCDOS1: BorderStyle = BorderStyle::from_static(PRESETS[2].1);
    pub const PCDOS2: BorderStyle = BorderStyle::from_static(PRESETS[3].1);

    const fn from_static(glyphs: Glyphs) -> Self {
        Self {
            corner_top_left: Cow::Borrowed(glyphs[0]),
            edge_top: Cow::Borrowed(glyphs[1]),
            corner_top_right: Cow::Borrowed(glyphs[2]),
            edge_right: Cow::Borrowed(glyphs[3]),
            corner_bottom_right: Cow::Borrowed(glyphs[4]),
            edge_bottom: Cow::Borrowed(glyphs[5]),
            corner_bottom_left: Cow::Borrowed(glyphs[6]),
            edge_left: Cow::Borrowed(glyphs[7]),
        }
    }

    /// Look up a preset by name.
    pub fn named(name: &str) -> Result<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, glyphs)| Self::from_static(*glyphs))
            .ok_or_else(|| Error::NamedStyleNotFound(name.to_string()))
    }

    /// Names of every preset, in table order.
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _)| *name)
    }

    /// Build a style from glyphs in positional order (TL, T, TR, R, BR, B, BL, L).
    pub fn from_glyphs(glyphs: [&str; 8]) -> Self {
        let [tl, t, tr, r, br, b, bl, l] = glyphs.map(|g| Cow::Owned(g.to_string()));
        Self {
            corner_top_left: tl,
            edge_top: t,
            corner_top_right: tr,
            edge_right: r,
            corner_bottom_right: br,
            edge_bottom: b,
            corner_bottom_left: bl,
            edge_left: l,
        }
    }

    /// Build a style from a string of one glyph (used everywhere) or eight
    /// single-character glyphs in positional order.
    pub fn from_glyph_str(glyphs: &str) -> Result<Self> {
        let chars: Vec<&str> = glyphs
            .char_indices()
            .map(|(i, c)| &glyphs[i..i + c.len_utf8()])
            .collect();
        match chars.as_slice() {
            [one] => Ok(Self::uniform(one)),
            [tl, t, tr, r, br, b, bl, l] => {
                Ok(Self::from_glyphs([*tl, *t, *tr, *r, *br, *b, *bl, *l]))
            }
            other => Err(Error::InvalidBorderGlyphs(other.len())),
        }
    }

    /// The same glyph in every slot.
    pub fn uniform(glyph: &str) -> Self {
        Self::from_glyphs([glyph; 8])
    }

    /// The same style with its corners and side edges tinted by a token.
    ///
    /// The left corners' tokens carry on through the horizontal edges.
    /// `reset` goes after the right-hand glyphs and the left edge so the
    /// color stops there.
    pub(crate) fn highlighted(&self, token: &str, reset: &str) -> Self {
        let tinted = |glyph: &str| Cow::Owned(format!("{token}{glyph}"));
        let closed = |glyph: &str| Cow::Owned(format!("{token}{glyph}{reset}"));
        Self {
            corner_top_left: tinted(&self.corner_top_left),
            edge_top: self.edge_top.clone(),
            corner_top_right: Cow::Owned(format!("{}{reset}", self.corner_top_right)),
            edge_right: closed(&self.edge_right),
            corner_bottom_right: closed(&self.corner_bottom_right),
            edge_bottom: self.edge_bottom.clone(),
            corner_bottom_left: tinted(&self.corner_bottom_left),
            edge_left: closed(&self.edge_left),
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::BASIC
    }
}

/// A border as written in a config file: a preset name or eight glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderSpec {
    Named(String),
    Glyphs([String; 8]),
}

impl Default for BorderSpec {
    fn default() -> Self {
        BorderSpec::Named("basic".to_string())
    }
}

impl BorderSpec {
    pub fn resolve(&self) -> Result<BorderStyle> {
        match self {
            BorderSpec::Named(name) => BorderStyle::named(name),
            BorderSpec::Glyphs(glyphs) => Ok(BorderStyle::from_glyphs(std::array::from_fn(
                |i| glyphs[i].as_str(),
            ))),
        }
    }
}
