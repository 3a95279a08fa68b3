//! Pretty-printer.
//!
//! Converts raw (possibly multi-statement) mod code into a canonical
//! multi-line, indented representation: brackets on their own lines, one
//! array element per line, spaces around attribute `=` signs, and a blank
//! line between statements.
//!
//! The single-statement scanner is an explicit state machine over a byte
//! cursor with a growable output buffer. Several rules depend on
//! positional context — the numeric-array lookahead, the `set`/`set_cmp`
//! equals-spacing suppression — so a token-based rewrite would complicate
//! rather than simplify it. All structural characters are ASCII, which
//! lets the scanner copy verbatim runs between them without inspecting
//! multi-byte sequences.

use crate::splitter::split_into_parts;
use crate::INDENT;

/// Structural bytes the single-statement scanner dispatches on.
/// Everything else is copied through unchanged.
fn is_structural(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'=' | b',' | b' ' | b'"')
}

fn trim_trailing_spaces(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

fn push_indent(out: &mut String, depth: i32) {
    for _ in 0..depth.max(0) {
        out.push_str(INDENT);
    }
}

/// Collapse runs of space characters (spaces only, not tabs) to one.
fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            prev_space = false;
            out.push(c);
        }
    }
    out
}

/// Whether the `=` about to be emitted delimits the object/field pair of
/// a `set` or `set_cmp` command rather than an attribute assignment.
///
/// True when the current output line starts with `set ` or `set_cmp ` —
/// in that position the `=` keeps its tight `Object Field=...` form
/// instead of getting spaces on both sides.
fn skip_equals_spacing(out: &str) -> bool {
    let line = match out.rfind('\n') {
        Some(pos) => &out[pos + 1..],
        None => out,
    };
    let Some(rest) = line.strip_prefix("set") else {
        return false;
    };
    if rest.starts_with(' ') {
        return true;
    }
    matches!(rest.strip_prefix("_cmp"), Some(after) if after.starts_with(' '))
}

/// Lookahead for a bare numeric array literal starting at the `(` at
/// `start`: every byte until a matching `)` must be a digit, space, or
/// comma. Returns the offset of the closing `)` relative to `start`, or
/// `None` if a disqualifying byte (or end of input) comes first.
///
/// Deliberately permissive about comma placement — `(1,,2)` and `(1 2)`
/// both count. Tightening this would change which groups are treated as
/// literals, so the guess is left alone.
fn numeric_literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut l = 1;
    while start + l < bytes.len() {
        match bytes[start + l] {
            b'0'..=b'9' | b' ' | b',' => l += 1,
            b')' => return Some(l),
            _ => return None,
        }
    }
    None
}

/// Formats raw mod code, which may span multiple lines and contain
/// multiple statements, into the canonical indented representation.
/// Statements are separated by one blank line.
///
/// Splitting into parts happens first, so a `set` token *inside* a
/// statement value doesn't get mistaken for the start of a new command.
/// Formatting already-formatted output is a no-op.
pub fn format_code(original: &str) -> String {
    let statements = split_into_parts(original);
    let mut formatted = Vec::with_capacity(statements.len());
    for statement in &statements {
        let flat = collapse_spaces(&statement.replace('\n', " "));
        let mut result = format_single_statement(&flat);
        if result.ends_with("\n\n") {
            result.truncate(result.len() - 2);
        }
        formatted.push(result);
    }
    formatted.join("\n\n")
}

/// Formats a single statement (normally pre-flattened by [`format_code`])
/// via one left-to-right scan with a nesting-depth counter.
///
/// The exceptions to plain bracket expansion:
///
/// - numeric array literals like `(1,2,3)` are copied verbatim, unsplit
/// - a `+` directly before `(` stays attached to the bracket (`+(`
///   continuation syntax)
/// - quoted spans are copied verbatim, with no escape interpretation;
///   an unterminated quote runs to the end of the input
/// - `=` directly on a `set `/`set_cmp ` line keeps its tight form
///
/// Unbalanced input never panics: a stray `)` just dedents, and an
/// unmatched `(` extends to the end of the string.
pub fn format_single_statement(original: &str) -> String {
    let src = original.trim();
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len() + src.len() / 2);
    let mut depth: i32 = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                if let Some(l) = numeric_literal_end(bytes, i) {
                    out.push_str(&src[i..=i + l]);
                    i += l + 1;
                    continue;
                }
                let had_plus = out.ends_with('+');
                if had_plus {
                    out.pop();
                }
                trim_trailing_spaces(&mut out);
                out.push('\n');
                push_indent(&mut out, depth);
                if had_plus {
                    out.push('+');
                }
                out.push('(');
                depth += 1;
                let mut j = i + 1;
                while j < bytes.len() && bytes[j] == b' ' {
                    j += 1;
                }
                // Consecutive opens stay on consecutive lines without an
                // empty indented line between them.
                if j < bytes.len() && bytes[j] != b'(' {
                    out.push('\n');
                    push_indent(&mut out, depth);
                }
                i += 1;
            }
            b')' => {
                trim_trailing_spaces(&mut out);
                out.push('\n');
                depth -= 1;
                push_indent(&mut out, depth);
                out.push(')');
                if depth == 0 {
                    out.push_str("\n\n");
                }
                i += 1;
            }
            b'=' => {
                let skip = skip_equals_spacing(&out);
                if !skip && (i == 0 || bytes[i - 1] != b' ') {
                    out.push(' ');
                }
                out.push('=');
                if !skip && (i + 1 >= bytes.len() || bytes[i + 1] != b' ') {
                    out.push(' ');
                }
                i += 1;
            }
            b',' => {
                out.push(',');
                let mut j = i + 1;
                while j < bytes.len() && bytes[j] == b' ' {
                    j += 1;
                }
                // One array element per line, except at depth 0 and
                // except when the next element is itself a bracket.
                if depth != 0 && j < bytes.len() && bytes[j] != b'(' {
                    out.push('\n');
                    push_indent(&mut out, depth);
                }
                i += 1;
            }
            b' ' => {
                // Collapse space runs, and never let indentation (or a
                // bare newline) be followed by a stray space.
                match out.as_bytes().last() {
                    Some(b' ' | b'\n') | None => {}
                    _ => out.push(' '),
                }
                i += 1;
            }
            b'"' => match memchr::memchr(b'"', &bytes[i + 1..]) {
                Some(off) => {
                    let end = i + 1 + off;
                    out.push_str(&src[i..=end]);
                    i = end + 1;
                }
                None => {
                    out.push_str(&src[i..]);
                    i = bytes.len();
                }
            },
            _ => {
                let start = i;
                i += 1;
                while i < bytes.len() && !is_structural(bytes[i]) {
                    i += 1;
                }
                out.push_str(&src[start..i]);
            }
        }
    }
    out
}
