//! The `check` command: validate the commands in a mod file.
//!
//! Every statement that looks like a command (`set` / `set_cmp`) must
//! validate; other statements are reported as comments. Exits 1 if any
//! command is malformed.

use bmod_model::validate_command;

use super::read_file;

/// Check every statement in the file. Returns true if all commands are
/// well-formed.
pub fn check_file(path: &str) -> bool {
    let content = read_file(path);
    let parts = bmod_fmt::split_into_deformatted_parts(&content);

    let mut commands = 0usize;
    let mut comments = 0usize;
    let mut errors = 0usize;

    for (index, part) in parts.iter().enumerate() {
        let looks_like_command = {
            let trimmed = part.trim_start();
            let bytes = trimmed.as_bytes();
            bytes.len() >= 3 && bytes[..3].eq_ignore_ascii_case(b"set")
        };
        if looks_like_command {
            match validate_command(part, false) {
                Ok(()) => commands += 1,
                Err(e) => {
                    eprintln!("{path}: statement {}: {e}", index + 1);
                    eprintln!("    {}", part.trim());
                    errors += 1;
                }
            }
        } else if !part.trim().is_empty() {
            comments += 1;
        }
    }

    tracing::debug!(commands, comments, errors, "checked {path}");

    if errors > 0 {
        println!("{path}: {errors} malformed command(s), {commands} ok, {comments} comment(s)");
        false
    } else {
        println!("{path}: {commands} command(s), {comments} comment(s)");
        true
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
mod tests {
    use super::*;

    #[test]
    fn valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patch.txt");
        std::fs::write(
            &path,
            "# header\nset foo bar (baz=frotz)\nset_cmp foo bar old new\n",
        )
        .unwrap();
        assert!(check_file(&path.display().to_string()));
    }

    #[test]
    fn malformed_command_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patch.txt");
        std::fs::write(&path, "set foo\nset ok field value\n").unwrap();
        assert!(!check_file(&path.display().to_string()));
    }

    #[test]
    fn elements_classify_like_the_check() {
        use bmod_model::{elements_from_parts, ModElement};
        let elements = elements_from_parts(&["set foo bar baz", "# note"]);
        assert!(matches!(elements[0], ModElement::Set(_)));
        assert!(matches!(elements[1], ModElement::Comment(_)));
    }
}
