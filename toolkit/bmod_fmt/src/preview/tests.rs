use super::*;
use pretty_assertions::assert_eq;

#[test]
fn short_statement_passes_through() {
    assert_eq!(preview("set foo bar baz"), "set foo bar baz");
}

#[test]
fn inner_level_is_collapsed() {
    assert_eq!(
        preview("set foo bar (attr=baz)"),
        "set foo bar\n(attr=baz)"
    );
}

#[test]
fn line_count_is_clamped() {
    let code = "set foo bar (a=(b=(c=d)))";
    let rendered = preview_with(code, 0, 3, 120);
    let lines: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "...");
}

#[test]
fn long_lines_are_clipped() {
    let code = "set foo bar wordwordwordword";
    let rendered = preview_with(code, 1, 15, 10);
    assert_eq!(rendered, "set foo...");
}

#[test]
fn zero_line_budget_elides_everything() {
    assert_eq!(preview_with("set foo bar baz", 1, 0, 120), "...");
}

#[test]
fn empty_input() {
    assert_eq!(preview(""), "");
}
