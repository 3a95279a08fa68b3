//! Command handlers for the bmod CLI.
//!
//! Each submodule implements a specific CLI command (fmt, flatten, split,
//! check). Shared utilities like `read_file` live here in the module root.

mod check;
mod flatten;
mod fmt;
mod split;

pub use check::check_file;
pub use flatten::{run_flatten, FlattenConfig};
pub use fmt::{format_directory, format_file, run_format, FormatConfig, FormatResult};
pub use split::split_file;

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
