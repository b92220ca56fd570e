//! Integration tests for loading layout defaults from TOML.

use atmark::{header, render_box, wrap, Align, BorderStyle, Config};

use super::helpers::{temp_config, visible_widths};

#[test]
fn config_drives_box_layout() {
    let (_dir, path) = temp_config(
        r#"
width = 20
reflow = true
border = ["+", "-", "+", "|", "+", "-", "+", "|"]

[padding]
top = 1
bottom = 1
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let style = config.border_style().unwrap();
    assert_eq!(style, BorderStyle::ASCII);

    let rows = render_box(
        "one two three four five six",
        &style,
        &config.box_options(),
    )
    .unwrap();
    assert_eq!(rows.len(), 2 + 2 + 2);
    assert!(visible_widths(&rows).iter().all(|&w| w == 20));
}

#[test]
fn config_drives_wrapping() {
    let (_dir, path) = temp_config("width = 9\nalign = \"right\"\nindent = 0\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.align, Align::Right);

    let lines = wrap("AAAA BBBB CCC", &config.wrap_options()).unwrap();
    assert_eq!(lines, vec!["AAAA BBBB", "      CCC"]);
}

#[test]
fn config_drives_header() {
    let (_dir, path) = temp_config(
        r#"
width = 12

[header]
preset = "ascii"
use_colors = false
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let text = header(
        "Hi",
        &config.header.preset,
        config.header.highlight,
        &config.header_options(),
    )
    .unwrap();
    assert_eq!(text, "+----------+\n|    Hi    |\n+----------+");
}

#[test]
fn broken_config_reports_context() {
    let (_dir, path) = temp_config("padding = 3");
    let err = Config::load_from(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid config file"), "{message}");
}
