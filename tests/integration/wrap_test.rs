//! Integration tests for paragraph wrapping and the markup helpers.

use atmark::{fill, plain_length, render, slice, wrap, Align, Error, Measure, WrapOptions};

use super::helpers::styled_columns;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                     eiusmod tempor incididunt ut labore et dolore magna aliqua.";

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn wraps_at_nine_columns() {
    let lines = wrap("AAAA BBBB CCCC DDDD", &WrapOptions::new(9)).unwrap();
    assert_eq!(lines, vec!["AAAA BBBB", "CCCC DDDD"]);
}

#[test]
fn snapshot_justified_paragraph() {
    let text = fill(LOREM, &WrapOptions::new(30).align(Align::Full)).unwrap();

    insta::assert_snapshot!(text, @r"
    Lorem  ipsum  dolor  sit amet,
    consectetur  adipiscing  elit,
    sed    do    eiusmod    tempor
    incididunt ut labore et dolore
    magna                  aliqua.
    ");
}

#[test]
fn justified_lines_fill_the_width() {
    let lines = wrap(LOREM, &WrapOptions::new(30).align(Align::Full)).unwrap();
    for line in &lines {
        if line.split_whitespace().count() > 1 {
            assert_eq!(line.chars().count(), 30, "line {line:?}");
        }
    }
}

#[test]
fn right_aligned_lines_end_at_width() {
    let lines = wrap(LOREM, &WrapOptions::new(25).align(Align::Right)).unwrap();
    assert!(lines.iter().all(|line| line.chars().count() == 25));
    assert!(lines.iter().all(|line| !line.ends_with(' ')));
}

#[test]
fn visible_wrap_ignores_tokens_when_packing() {
    let text = "@0A@green words keep going@07@ then white";
    let lines = wrap(text, &WrapOptions::new(12).measure(Measure::Visible)).unwrap();

    assert_eq!(
        lines,
        vec!["@0A@green words", "keep going@07@", "then white"]
    );
    assert!(lines.iter().all(|line| plain_length(line) <= 12));
}

#[test]
fn hard_break_keeps_the_closing_token() {
    let text = "@0C@overlong@07@ ok";
    let lines = wrap(text, &WrapOptions::new(5).measure(Measure::Visible)).unwrap();
    assert_eq!(lines, vec!["@0C@overl", "@0C@ong@07@", "ok"]);

    let visible = |text: &str| {
        styled_columns(text)
            .into_iter()
            .filter(|(c, _)| *c != ' ')
            .collect::<Vec<_>>()
    };
    assert_eq!(visible(&lines.concat()), visible(text));
}

#[test]
fn wrap_rejects_zero_width() {
    assert!(matches!(
        fill("x", &WrapOptions::new(0)),
        Err(Error::LayoutTooNarrow { .. })
    ));
}

// ============================================================================
// Slicing and rendering
// ============================================================================

#[test]
fn slice_window_reopens_style() {
    assert_eq!(slice("@0E@Hello@07@ World", 3, 4).unwrap(), "@0E@lo@07@ W");
}

#[test]
fn full_slice_draws_every_character_the_same() {
    let text = "ab@0E@cd@0E@ef@X2@gh@XX@ij";
    let sliced = slice(text, 0, plain_length(text)).unwrap();
    assert_eq!(styled_columns(&sliced), styled_columns(text));
    assert_eq!(sliced, "ab@0E@cdef@X2@gh@XX@ij");
}

#[test]
fn render_of_plain_text_is_identity() {
    let text = "no tokens at all, just mail@example.com";
    assert_eq!(render(text).unwrap(), text);
}
