//! Style-preserving substrings of markup.

use super::{Markup, Style};
use crate::error::Result;

impl Markup {
    /// Markup for at most `length` visible columns starting at `offset`.
    ///
    /// A token is written wherever the active style differs from the
    /// previous character's, starting from [`Style::UNSTYLED`]. A window
    /// that begins inside a styled run therefore opens with that run's
    /// token.
    pub fn slice(&self, offset: usize, length: usize) -> String {
        let end = offset.saturating_add(length);
        let mut out = String::new();
        let mut active = Style::UNSTYLED;

        for run in &self.runs {
            let lo = run.start.max(offset);
            let hi = run.end().min(end);
            if lo >= hi {
                continue;
            }
            if run.style != active {
                out.push_str(&run.style.to_string());
                active = run.style;
            }
            out.extend(
                self.run_text(run)
                    .chars()
                    .skip(lo - run.start)
                    .take(hi - lo),
            );
        }
        out
    }
}

/// Extract a visible-column window of a markup string.
///
/// Offsets past the end give an empty string; lengths past the end are
/// clipped.
pub fn slice(text: &str, offset: usize, length: usize) -> Result<String> {
    Ok(Markup::parse(text)?.slice(offset, length))
}
