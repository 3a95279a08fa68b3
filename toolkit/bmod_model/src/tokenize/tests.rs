use super::*;
use pretty_assertions::assert_eq;

#[test]
fn splits_simple_arguments() {
    assert_eq!(
        split_arguments("set foo bar baz", 3),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn surplus_tokens_join_into_the_value() {
    assert_eq!(
        split_arguments("set foo bar a b c", 3),
        vec!["foo", "bar", "a b c"]
    );
}

#[test]
fn missing_tokens_pad_as_empty() {
    assert_eq!(split_arguments("set foo", 3), vec!["foo", "", ""]);
    assert_eq!(split_arguments("set", 3), vec!["", "", ""]);
}

#[test]
fn bracketed_value_stays_whole() {
    assert_eq!(
        split_arguments("set foo bar ( baz = frotz , nitfol = zemdor )", 3),
        vec!["foo", "bar", "( baz = frotz , nitfol = zemdor )"]
    );
}

#[test]
fn quoted_value_stays_whole() {
    assert_eq!(
        split_arguments("set foo bar \"a b c\"", 3),
        vec!["foo", "bar", "\"a b c\""]
    );
}

#[test]
fn brackets_inside_quotes_are_inert() {
    assert_eq!(
        split_arguments("set foo bar \"( a\" next", 3),
        vec!["foo", "bar", "\"( a\" next"]
    );
}

#[test]
fn set_cmp_arity() {
    assert_eq!(
        split_arguments("set_cmp foo bar old new", 4),
        vec!["foo", "bar", "old", "new"]
    );
}

#[test]
fn surplus_join_with_four_pieces() {
    assert_eq!(
        split_arguments("set_cmp foo bar old new er value", 4),
        vec!["foo", "bar", "old", "new er value"]
    );
}

#[test]
fn extra_interior_whitespace_is_not_preserved_between_tokens() {
    assert_eq!(
        split_arguments("set   foo   bar   baz", 3),
        vec!["foo", "bar", "baz"]
    );
}
