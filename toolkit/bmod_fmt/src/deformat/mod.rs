//! De-formatter.
//!
//! The inverse of the pretty-printer: collapses a (formatted or raw)
//! statement back to a single line by removing every space that lies
//! outside a quoted span. The depth-limited variant collapses only the
//! innermost N bracket levels, leaving shallower structure formatted.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::format::format_code;

/// Flattens text onto a single line: newlines become spaces, then all
/// non-quoted spaces are removed.
pub fn deformat_code(original: &str) -> String {
    remove_non_quoted_spaces(&original.replace('\n', " "))
}

/// Removes every space character outside quoted spans. Quoted content is
/// copied verbatim, internal spaces included; an unterminated quote
/// copies through to the end of the input.
pub fn remove_non_quoted_spaces(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => match memchr::memchr(b'"', &bytes[i + 1..]) {
                Some(off) => {
                    let end = i + 1 + off;
                    out.push_str(&s[i..=end]);
                    i = end + 1;
                }
                None => {
                    out.push_str(&s[i..]);
                    i = bytes.len();
                }
            },
            b' ' => i += 1,
            _ => {
                let next = memchr::memchr2(b' ', b'"', &bytes[i..])
                    .map_or(bytes.len(), |off| i + off);
                out.push_str(&s[i..next]);
                i = next;
            }
        }
    }
    out
}

/// Collapses only the innermost `n` bracket levels of `original` onto
/// single lines, leaving shallower structure in formatted form.
///
/// The input is first run through [`format_code`] to normalize bracket
/// placement, then scanned once to build, per open bracket, the deepest
/// nesting reached inside it (leaf-relative, 1-based) and the index of
/// its matching close. A bracket is collapsed when its depth `d`
/// satisfies `d <= n`, or when `d` equals the text's maximum depth and
/// that maximum is below `n` (so an oversized `n` still flattens the
/// deepest available groups). `n = 0` therefore collapses nothing, and
/// any `n >= maxdepth` flattens the whole statement.
///
/// Unbalanced input degrades gracefully: an unmatched `(` is treated as
/// running to the end of the string, and a stray `)` at depth 0 is
/// ignored.
pub fn deformat_inner_brackets(original: &str, n: usize) -> String {
    let normalized = format_code(original);
    let bytes = normalized.as_bytes();

    let mut stack: Vec<usize> = Vec::new();
    let mut depth_map: BTreeMap<usize, usize> = BTreeMap::new();
    let mut closing: FxHashMap<usize, usize> = FxHashMap::default();
    let mut depth = 0usize;
    let mut maxdepth = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'(' {
            depth += 1;
            maxdepth = maxdepth.max(depth);
            // Propagate the nesting reached so far up through every
            // still-open ancestor.
            for (j, start) in stack.iter().enumerate() {
                if let Some(d) = depth_map.get_mut(start) {
                    *d = (*d).max(depth - j);
                }
            }
            stack.push(i);
            depth_map.insert(i, 1);
        } else if b == b')' && depth != 0 {
            depth -= 1;
            if let Some(start) = stack.pop() {
                closing.insert(start, i);
            }
        }
    }

    let mut replacements: BTreeMap<usize, String> = BTreeMap::new();
    for (&start, &d) in &depth_map {
        if d <= n || (d == maxdepth && maxdepth < n) {
            let end = closing.get(&start).copied().unwrap_or(normalized.len());
            replacements.insert(start, deformat_code(&normalized[start..end]));
        }
    }

    let mut out = String::with_capacity(normalized.len());
    let mut i = 0;
    while i < bytes.len() {
        if let Some(replacement) = replacements.get(&i) {
            // Keep `field=` tight against the collapsed span.
            let trimmed_len = out.trim_end().len();
            if out[..trimmed_len].ends_with('=') {
                out.truncate(trimmed_len);
            }
            out.push_str(replacement.trim());
            i = closing.get(&i).copied().unwrap_or(bytes.len());
        } else {
            let next = replacements
                .range(i + 1..)
                .next()
                .map_or(bytes.len(), |(&start, _)| start);
            out.push_str(&normalized[i..next]);
            i = next;
        }
    }
    out
}
