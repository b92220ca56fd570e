//! Markup to terminal escape codes.

use super::Markup;
use crate::error::Result;

impl Markup {
    /// Render every run with its style's escape codes.
    ///
    /// `X` channels emit nothing, so the terminal keeps showing whatever an
    /// earlier token left there. No color state is tracked here.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.plain.len() * 2);
        for run in &self.runs {
            out.push_str(&run.style.paint(self.run_text(run)));
        }
        out
    }
}

/// Render a markup string to text with real escape codes.
///
/// Text without tokens comes back unchanged.
pub fn render(text: &str) -> Result<String> {
    Ok(Markup::parse(text)?.render())
}
