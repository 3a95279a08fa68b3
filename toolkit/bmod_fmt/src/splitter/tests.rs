use super::*;
use pretty_assertions::assert_eq;

// === split_into_parts ===

#[test]
fn single_statement() {
    assert_eq!(split_into_parts("set foo bar baz"), vec!["set foo bar baz"]);
}

#[test]
fn non_keyword_line_attaches_to_preceding_statement() {
    assert_eq!(
        split_into_parts("set A B 1\nfoo bar\nset C D 2"),
        vec!["set A B 1\nfoo bar", "set C D 2"]
    );
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        split_into_parts("SET foo bar baz\nSay hello"),
        vec!["SET foo bar baz", "Say hello"]
    );
}

#[test]
fn set_prefix_starts_a_statement() {
    // Command Extension commands like `set_early` count via the bare
    // `set` prefix even though they aren't in the keyword list.
    assert_eq!(
        split_into_parts("set_early foo bar baz\nset_early one two three"),
        vec!["set_early foo bar baz", "set_early one two three"]
    );
}

#[test]
fn comments_are_their_own_parts() {
    assert_eq!(
        split_into_parts("# This is a comment\nset foo bar baz\n# One more comment"),
        vec!["# This is a comment", "set foo bar baz", "# One more comment"]
    );
}

#[test]
fn leading_non_keyword_lines_form_a_part() {
    assert_eq!(
        split_into_parts("stray line\nset foo bar baz"),
        vec!["stray line", "set foo bar baz"]
    );
}

#[test]
fn whitespace_only_line_never_starts_a_part() {
    assert_eq!(
        split_into_parts("set foo bar baz\n   \nset one two three"),
        vec!["set foo bar baz\n   ", "set one two three"]
    );
}

#[test]
fn empty_input_yields_one_empty_part() {
    assert_eq!(split_into_parts(""), vec![""]);
}

#[test]
fn trailing_newlines_are_dropped() {
    assert_eq!(
        split_into_parts("set foo bar baz\nset one two three\n\n"),
        vec!["set foo bar baz", "set one two three"]
    );
}

// === split_into_deformatted_parts ===

#[test]
fn deformatted_simple_set() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar baz"),
        vec!["set foo bar baz"]
    );
}

#[test]
fn deformatted_set_with_set_in_the_value() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar baz set more"),
        vec!["set foo bar baz set more"]
    );
}

#[test]
fn deformatted_two_sets() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar baz\nset one two three\n"),
        vec!["set foo bar baz", "set one two three"]
    );
}

#[test]
fn deformatted_multiline_statement() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar (\nattr=foo,\nattr2=bar\n)\n\n"),
        vec!["set foo bar (attr=foo,attr2=bar)"]
    );
}

#[test]
fn deformatted_multiline_statement_with_extra_spaces() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar\n (\n   attr=foo,\n    attr2=bar\n)\n\n"),
        vec!["set foo bar (attr=foo,attr2=bar)"]
    );
}

#[test]
fn deformatted_two_statements_one_fancy() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar (attr=foo,attr2=bar)\nset foo bar baz\n"),
        vec!["set foo bar (attr=foo,attr2=bar)", "set foo bar baz"]
    );
}

#[test]
fn deformatted_multi_nested_statement() {
    let input = "set foo bar\n\
                 (\n\
                 \x20   attr = foo,\n\
                 \x20   attr2 = (3,4),\n\
                 \x20   attr3 =\n\
                 \x20   (\n\
                 \x20       one = two\n\
                 \x20   )\n\
                 )";
    assert_eq!(
        split_into_deformatted_parts(input),
        vec!["set foo bar (attr=foo,attr2=(3,4),attr3=(one=two))"]
    );
}

#[test]
fn deformatted_all_commands() {
    let input = "set foo bar baz\n\
                 set_cmp foo bar baz frotz\n\
                 exec patch.txt\n\
                 say Some text which could crash the game\n";
    assert_eq!(
        split_into_deformatted_parts(input),
        vec![
            "set foo bar baz",
            "set_cmp foo bar baz frotz",
            "exec patch.txt",
            "say Some text which could crash the game",
        ]
    );
}

#[test]
fn deformatted_all_commands_with_extra_newlines() {
    let input = "set foo bar baz\n\n\
                 set_cmp foo bar baz frotz\n\n\
                 exec patch.txt\n\n\
                 say Some text which could crash the game\n\n";
    assert_eq!(
        split_into_deformatted_parts(input),
        vec![
            "set foo bar baz",
            "set_cmp foo bar baz frotz",
            "exec patch.txt",
            "say Some text which could crash the game",
        ]
    );
}

#[test]
fn random_text_splits_on_lines() {
    assert_eq!(
        split_into_deformatted_parts("blarg bloog blurg\nblip blam blop\n"),
        vec!["blarg bloog blurg", "blip blam blop"]
    );
}

#[test]
fn random_text_with_extra_newline_keeps_empty_line() {
    assert_eq!(
        split_into_deformatted_parts("blarg bloog blurg\n\nblip blam blop\n"),
        vec!["blarg bloog blurg", "", "blip blam blop"]
    );
}

#[test]
fn random_text_after_set_concats() {
    // Perhaps not ideal, but them's the breaks: continuation lines fold
    // into the preceding set statement.
    assert_eq!(
        split_into_deformatted_parts("set foo bar baz\nblarg bloog blurg\nblip blam blop\n"),
        vec!["set foo bar baz blarg bloog blurg blip blam blop"]
    );
}

#[test]
fn command_extension_statements() {
    assert_eq!(
        split_into_deformatted_parts("set_early foo bar (\n    baz\n)\nset_early one two three"),
        vec!["set_early foo bar (baz)", "set_early one two three"]
    );
}

#[test]
fn command_extension_nested() {
    let input = "set_early foo bar (\n\
                 \x20 (\n\
                 \x20   baz = foo\n\
                 \x20 ),\n\
                 \x20 (\n\
                 \x20   baz = bar\n\
                 \x20 )\n\
                 )";
    assert_eq!(
        split_into_deformatted_parts(input),
        vec!["set_early foo bar ((baz=foo),(baz=bar))"]
    );
}

#[test]
fn comment_with_a_set() {
    assert_eq!(
        split_into_deformatted_parts("# This is a comment\nset foo bar baz"),
        vec!["# This is a comment", "set foo bar baz"]
    );
}

#[test]
fn comment_whitespace_is_untouched_without_leading_set() {
    assert_eq!(
        split_into_deformatted_parts("# comments  with  some  whitespace"),
        vec!["# comments  with  some  whitespace"]
    );
}

#[test]
fn quoted_content_survives_deformatting() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar ( frotz = \" one , two \" , nitfol = \" ( three )\" )"),
        vec!["set foo bar (frotz=\" one , two \",nitfol=\" ( three )\")"]
    );
}

#[test]
fn dangling_quote_copies_verbatim() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar \"( frotz = nitfol )"),
        vec!["set foo bar \"( frotz = nitfol )"]
    );
}

#[test]
fn dangling_quote_after_closed_quote() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar ( frotz = \" one , two \" , nitfol = \" ( three )"),
        vec!["set foo bar (frotz=\" one , two \",nitfol=\" ( three )"]
    );
}

#[test]
fn whitespace_deletion_in_nested_groups() {
    assert_eq!(
        split_into_deformatted_parts("set foo bar ( ( baz = frotz , nitfol = zemdor ) )"),
        vec!["set foo bar ((baz=frotz,nitfol=zemdor))"]
    );
}
