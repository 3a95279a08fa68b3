//! Statement splitter.
//!
//! Breaks a block of freeform mod code into discrete "parts": each part is
//! ideally one statement (a line starting with a recognized command
//! keyword, plus any continuation lines that follow it) or one standalone
//! comment line. The sniffing is deliberately simple — per-line, first
//! token only — since the statement language has no block structure at the
//! line level.

use crate::deformat::deformat_code;
use crate::format::format_code;

/// The commands recognized as statement starters.
///
/// Commands are matched case-insensitively. A leading `#` (comment marker)
/// or a bare `set` prefix also starts a new part: the prefix check catches
/// `set_early`-style Command Extension commands that aren't in this list.
pub const COMMANDS: [&str; 4] = ["set", "set_cmp", "exec", "say"];

/// Whether a line's first token (already lowercased) begins a new statement.
fn starts_new_statement(token: &str) -> bool {
    COMMANDS.contains(&token) || token.starts_with('#') || token.starts_with("set")
}

/// Split on `\n` with the splitter's line conventions: trailing empty
/// lines are dropped, and empty input yields a single empty line.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Splits freeform mod code into discrete parts, each one theoretically a
/// single statement or a single comment line.
///
/// A line whose first token is a recognized command (or starts with `#` or
/// `set`) opens a new part; any other line is appended to the part
/// currently being accumulated. Leading non-keyword lines still form a
/// part of their own. Lines are never reordered or deduplicated.
pub fn split_into_parts(mod_code: &str) -> Vec<String> {
    let mut groups: Vec<Vec<&str>> = Vec::new();
    for line in split_lines(mod_code) {
        if let Some(token) = line.split_whitespace().next() {
            if starts_new_statement(&token.to_ascii_lowercase()) {
                groups.push(Vec::new());
            }
        }
        if groups.is_empty() {
            groups.push(Vec::new());
        }
        if let Some(group) = groups.last_mut() {
            group.push(line);
        }
    }

    groups
        .into_iter()
        .map(|lines| {
            let statement = lines.join("\n");
            match statement.strip_suffix('\n') {
                Some(stripped) => stripped.to_owned(),
                None => statement,
            }
        })
        .collect()
}

/// Splits mod code into discrete parts and de-formats each statement onto
/// a single line, with spurious whitespace stripped.
///
/// This is the main entry point when committing user-edited code: the
/// result is what downstream command parsing consumes. If the first token
/// of the whole block doesn't start with `set`, the parts are just the
/// individual lines, untouched.
pub fn split_into_deformatted_parts(mod_code: &str) -> Vec<String> {
    let leads_with_set = mod_code
        .trim_start()
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("set"));
    if !leads_with_set {
        return split_lines(mod_code)
            .into_iter()
            .map(str::to_owned)
            .collect();
    }

    // Format first to normalize bracket and whitespace placement, which
    // makes the per-part folding below reliable.
    let formatted = format_code(mod_code);
    let mut parts = split_into_parts(&formatted);

    for part in &mut parts {
        if !part.starts_with("set") {
            continue;
        }
        let Some(split) = part.find('\n') else {
            continue;
        };
        *part = if split < part.len() - 1 {
            let head = &part[..split];
            let tail = &part[split + 1..];
            format!("{} {}", head.trim(), deformat_code(tail).trim())
        } else {
            part[..split].trim().to_owned()
        };
    }
    parts
}

#[cfg(test)]
mod tests;
