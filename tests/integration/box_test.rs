//! Integration tests for border lines and boxes.

use atmark::{
    border_line, named_border_line, render_box, render_named_box, BorderStyle, BoxOptions,
    Error, Measure, Padding,
};

use super::helpers::visible_widths;

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn snapshot_reflowed_pcdos2_box() {
    let text = "The quick brown fox\njumps over the lazy dog.\n\n  indented line kept";
    let options = BoxOptions {
        width: 30,
        reflow: true,
        ..Default::default()
    };
    let rows = render_named_box(text, "pcdos2", &options).unwrap();

    insta::assert_snapshot!(rows.join("\n"), @r"
    ╔════════════════════════════╗
    ║ The quick brown fox jumps  ║
    ║ over the lazy dog.         ║
    ║                            ║
    ║   indented line kept       ║
    ╚════════════════════════════╝
    ");
}

#[test]
fn snapshot_comment_box() {
    let options = BoxOptions {
        width: 24,
        ..Default::default()
    };
    let rows = render_named_box("fn main() {}", "lc-closed-hash", &options).unwrap();

    insta::assert_snapshot!(rows.join("\n"), @r"
    //######################
    //# fn main() {}       #
    //######################
    ");
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn row_count_includes_padding_and_borders() {
    let options = BoxOptions {
        width: 20,
        padding: Padding::from([2, 1, 1, 1]),
        ..Default::default()
    };
    let rows = render_box("a\nb\nc", &BorderStyle::PCDOS1, &options).unwrap();

    assert_eq!(rows.len(), 2 + 3 + 1 + 2);
    assert!(visible_widths(&rows).iter().all(|&w| w == 20));
}

#[test]
fn styled_content_rows_have_full_visible_width() {
    let options = BoxOptions {
        width: 26,
        measure: Measure::Visible,
        reflow: true,
        ..Default::default()
    };
    let text = "@0E@warning:@07@ the @0C@disk@07@ is almost full, clean up soon";
    let rows = render_box(text, &BorderStyle::ASCII, &options).unwrap();

    assert!(rows.len() > 3);
    assert_eq!(visible_widths(&rows), vec![26; rows.len()]);
}

#[test]
fn tokenized_glyphs_do_not_count_as_columns() {
    let style = BorderStyle::from_glyphs([
        "@0B@+", "-", "+@07@", "@0B@|@07@", "@0B@+", "-", "@0B@+", "@0B@|@07@",
    ]);
    let options = BoxOptions {
        width: 12,
        measure: Measure::Visible,
        ..Default::default()
    };
    let rows = render_box("hello", &style, &options).unwrap();

    assert_eq!(visible_widths(&rows), vec![12, 12, 12]);
    assert_eq!(rows[0], "@0B@+----------+@07@");
}

#[test]
fn open_preset_rows_stop_after_content() {
    let options = BoxOptions {
        width: 16,
        omit_right: true,
        ..Default::default()
    };
    let rows = render_named_box("short", "lc-open-equal", &options).unwrap();
    assert_eq!(rows[1], "// short");
    assert_eq!(rows[0], "//==============");
}

#[test]
fn open_preset_blank_rows_are_the_left_edge() {
    let options = BoxOptions {
        width: 16,
        omit_right: true,
        padding: Padding::from([1, 1, 2, 1]),
        ..Default::default()
    };
    let rows = render_named_box("short", "lc-open-equal", &options).unwrap();
    assert_eq!(
        rows,
        vec!["//==============", "//", "// short", "//", "//", "//=============="]
    );
    assert!(rows.iter().all(|row| !row.ends_with(' ')));
}

// ============================================================================
// Border lines
// ============================================================================

#[test]
fn border_line_matches_preset_top() {
    let style = BorderStyle::named("lc-pcdos2-gap").unwrap();
    assert_eq!(
        named_border_line(12, "lc-pcdos2-gap", Measure::Raw).unwrap(),
        style.top_line(12, Measure::Raw).unwrap()
    );
    assert_eq!(
        named_border_line(12, "lc-pcdos2-gap", Measure::Raw).unwrap(),
        "// ╔═══════╗"
    );
}

#[test]
fn border_line_exact_width_for_any_edge_length() {
    for width in 4..20 {
        let line = border_line(width, "<", "-=~", ">", Measure::Raw).unwrap();
        assert_eq!(line.chars().count(), width, "width {width}");
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn box_too_narrow_for_borders() {
    let options = BoxOptions {
        width: 6,
        ..Default::default()
    };
    let err = render_named_box("x", "lc-ascii-gap", &options).unwrap_err();
    assert!(matches!(err, Error::LayoutTooNarrow { .. }));
    assert!(err.to_string().starts_with("Layout too narrow"));
}

#[test]
fn box_with_malformed_glyph_markup() {
    let options = BoxOptions {
        measure: Measure::Visible,
        ..Default::default()
    };
    assert!(matches!(
        render_box("text", &BorderStyle::uniform("@GG@"), &options),
        Err(Error::InvalidMarkupToken { .. })
    ));
}
