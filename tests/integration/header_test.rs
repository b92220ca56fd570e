//! Integration tests for headers and diagnostics.

use atmark::palette::strip;
use atmark::{format_message, header, write_header, HeaderOptions, Level, Style};

fn highlight() -> Style {
    "@0B@".parse().unwrap()
}

fn no_colors(width: usize) -> HeaderOptions {
    HeaderOptions {
        width,
        use_colors: false,
    }
}

#[test]
fn snapshot_pcdos2_header() {
    let text = header("Report", "pcdos2", highlight(), &no_colors(40)).unwrap();

    insta::assert_snapshot!(text, @r"
    ╔══════════════════════════════════════╗
    ║                Report                ║
    ╚══════════════════════════════════════╝
    ");
}

#[test]
fn basic_header_without_colors() {
    let text = header("useColors = false", "basic", highlight(), &no_colors(76)).unwrap();
    let expected = format!(
        "{bar}\n={}useColors = false{}=\n{bar}",
        " ".repeat(28),
        " ".repeat(29),
        bar = "=".repeat(76)
    );
    assert_eq!(text, expected);
}

#[test]
fn colored_header_strips_to_plain_header() {
    let colored = header("Build", "ascii", highlight(), &HeaderOptions::default()).unwrap();
    let plain = header("Build", "ascii", highlight(), &no_colors(76)).unwrap();

    assert!(colored.contains('\x1b'));
    assert_eq!(strip(&colored), plain);
}

#[test]
fn styled_title_keeps_its_markup() {
    let text = header("@0E@Hot@07@ news", "ascii", highlight(), &HeaderOptions {
        width: 20,
        use_colors: true,
    })
    .unwrap();
    let middle = strip(text.lines().nth(1).unwrap());
    assert_eq!(middle, "|     Hot news     |");
    // bright yellow on black
    assert!(text.contains("\x1b[93m\x1b[40mHot"));
}

#[test]
fn write_header_to_sink() {
    let mut out: Vec<u8> = Vec::new();
    write_header(&mut out, "T", "basic", highlight(), &no_colors(9)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "=========\n=   T   =\n=========\n");
}

#[test]
fn fatal_message_layout() {
    let text = format_message(Level::Fatal, "cannot open file", Some("io.rs")).unwrap();
    assert_eq!(strip(&text), "*FATAL* cannot open file [io.rs]");
}
