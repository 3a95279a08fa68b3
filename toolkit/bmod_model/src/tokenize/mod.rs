//! Command-aware argument splitting.
//!
//! A plain whitespace split would tear apart values like
//! `( baz = frotz )` or `"a b"`. The splitter here only breaks at
//! whitespace that sits at bracket depth 0 outside quoted spans, so a
//! command's final value can carry arbitrary structure.

/// Splits the arguments of a command (everything after the keyword) into
/// `strive_for` pieces.
///
/// Whitespace breaks tokens only at bracket depth 0 outside quotes.
/// Surplus trailing tokens are joined back into the final piece with
/// single spaces; missing pieces pad out as empty strings, so the result
/// always has exactly `strive_for` elements.
pub fn split_arguments(command: &str, strive_for: usize) -> Vec<String> {
    let command = command.trim();
    // Everything after the command keyword itself.
    let rest = match command.split_once(char::is_whitespace) {
        Some((_, rest)) => rest,
        None => "",
    };

    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    for c in rest.chars() {
        if c.is_whitespace() && !in_quotes && depth == 0 {
            if !current.trim().is_empty() {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            continue;
        }
        match c {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => depth -= 1,
            _ => {}
        }
        current.push(c);
    }
    if !current.trim().is_empty() {
        tokens.push(current);
    }

    if tokens.len() > strive_for {
        let tail = tokens.split_off(strive_for - 1).join(" ");
        tokens.push(tail);
    }
    while tokens.len() < strive_for {
        tokens.push(String::new());
    }
    tokens
}

#[cfg(test)]
mod tests;
