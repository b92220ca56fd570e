//! Shared helpers for integration tests.

use std::path::PathBuf;

use atmark::{plain_length, Markup, Style};
use tempfile::TempDir;

/// Write a config file into a fresh temp dir.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

/// Visible width of every row.
pub fn visible_widths(rows: &[String]) -> Vec<usize> {
    rows.iter().map(|row| plain_length(row)).collect()
}

/// Each visible character with the style it is drawn in.
pub fn styled_columns(text: &str) -> Vec<(char, Style)> {
    let markup = Markup::parse(text).expect("Invalid markup in test input");
    markup
        .runs()
        .iter()
        .flat_map(|run| {
            markup
                .run_text(run)
                .chars()
                .map(move |c| (c, run.style))
                .collect::<Vec<_>>()
        })
        .collect()
}
