//! The `split` command: list the individual statements of a mod file.

use super::read_file;

/// Print each statement of the file on its own line, flattened.
pub fn split_file(path: &str) {
    let content = read_file(path);
    for part in bmod_fmt::split_into_deformatted_parts(&content) {
        println!("{part}");
    }
}
