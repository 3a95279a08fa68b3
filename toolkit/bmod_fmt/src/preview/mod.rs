//! Truncated preview rendering.
//!
//! Produces a compact, display-oriented rendering of a command: the
//! innermost bracket levels are collapsed via
//! [`deformat_inner_brackets`], then the result is clamped to a maximum
//! number of lines and columns, with `...` marking elided content.

use crate::deformat::deformat_inner_brackets;

/// Default maximum number of lines in a preview.
pub const DEFAULT_PREVIEW_LINES: usize = 15;

/// Default maximum line width in a preview, in characters.
pub const DEFAULT_PREVIEW_COLUMNS: usize = 120;

/// Renders `code` for display with the default limits and one collapsed
/// inner bracket level.
pub fn preview(code: &str) -> String {
    preview_with(code, 1, DEFAULT_PREVIEW_LINES, DEFAULT_PREVIEW_COLUMNS)
}

/// Renders `code` for display: collapse the innermost `inner` bracket
/// levels, keep at most `max_lines` lines, and clip each line to
/// `max_columns` characters. Elisions are marked with `...`.
pub fn preview_with(code: &str, inner: usize, max_lines: usize, max_columns: usize) -> String {
    let flattened = deformat_inner_brackets(code, inner);
    let mut out = String::new();
    for (count, line) in flattened.split('\n').enumerate() {
        if count > 0 {
            out.push('\n');
        }
        if count == max_lines {
            out.push_str("...");
            break;
        }
        if line.chars().count() > max_columns {
            for c in line.chars().take(max_columns.saturating_sub(3)) {
                out.push(c);
            }
            out.push_str("...");
        } else {
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests;
