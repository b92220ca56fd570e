//! Layout and markup errors.

/// Errors that can occur while rendering markup or laying out text.
///
/// All of these are local validation failures. Nothing is partially
/// written when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid markup token '{token}' at byte {offset}")]
    InvalidMarkupToken { token: String, offset: usize },

    #[error("No border style named '{0}'")]
    NamedStyleNotFound(String),

    #[error("Layout too narrow: {what} leaves {available} columns")]
    LayoutTooNarrow { what: &'static str, available: i64 },

    #[error("Border glyph string must have 1 or 8 glyphs, got {0}")]
    InvalidBorderGlyphs(usize),

    #[error("Unknown message level '{0}'")]
    UnknownLevel(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a `LayoutTooNarrow` failure.
    pub(crate) fn too_narrow(what: &'static str, available: i64) -> Self {
        Self::LayoutTooNarrow { what, available }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
