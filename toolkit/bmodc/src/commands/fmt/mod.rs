//! The `fmt` command: pretty-print mod files.
//!
//! Supports single files, directories, and stdin. Directories are processed
//! in parallel.

use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::read_file;

/// Configuration for the format command.
#[derive(Default)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// Returns exit code 1 if any files would be modified.
    pub check: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
}

/// Result of formatting a single file.
pub enum FormatResult {
    /// File was unchanged (already formatted).
    Unchanged,
    /// File was formatted successfully.
    Formatted,
    /// File would be formatted (in check mode).
    WouldFormat,
}

/// Pretty-print mod code, ensuring a trailing newline.
fn format(content: &str) -> String {
    let formatted = bmod_fmt::format_code(content);
    if formatted.ends_with('\n') {
        formatted
    } else {
        format!("{formatted}\n")
    }
}

/// Format a single mod file.
///
/// Returns the format result indicating whether the file was changed.
pub fn format_file(path: &str, config: &FormatConfig) -> FormatResult {
    let content = read_file(path);
    format_content(path, &content, config)
}

/// Format content from stdin and write to stdout.
pub fn format_stdin() -> bool {
    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }
    print!("{}", format(&content));
    true
}

/// Format content and optionally write it back to the file.
fn format_content(path: &str, content: &str, config: &FormatConfig) -> FormatResult {
    let formatted = format(content);

    if formatted == content {
        return FormatResult::Unchanged;
    }

    if config.check {
        return FormatResult::WouldFormat;
    }

    if let Err(e) = std::fs::write(path, &formatted) {
        eprintln!("Error writing '{path}': {e}");
        std::process::exit(1);
    }

    FormatResult::Formatted
}

/// Whether a directory entry looks like a mod file.
fn is_mod_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case("blcm") || ext.eq_ignore_ascii_case("txt")
    })
}

/// Visit all mod files in a directory recursively.
fn visit_mod_files<F: FnMut(&Path)>(dir: &Path, callback: &mut F) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories.
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            visit_mod_files(&path, callback);
        } else if is_mod_file(&path) {
            callback(&path);
        }
    }
}

/// Format all mod files in a directory recursively.
///
/// Returns `(formatted, unchanged)` counts.
pub fn format_directory(path: &str, config: &FormatConfig) -> (usize, usize) {
    let mut files = Vec::new();
    visit_mod_files(Path::new(path), &mut |file_path| {
        files.push(file_path.to_path_buf());
    });

    tracing::debug!(count = files.len(), "formatting directory {path}");

    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);

    files.par_iter().for_each(|file_path| {
        let path_str = file_path.display().to_string();
        match format_file(&path_str, config) {
            FormatResult::Formatted => {
                if !config.check {
                    println!("Formatted: {path_str}");
                }
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            FormatResult::WouldFormat => {
                if config.check {
                    println!("Would format: {path_str}");
                }
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            FormatResult::Unchanged => {
                unchanged_count.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    (
        formatted_count.load(Ordering::Relaxed),
        unchanged_count.load(Ordering::Relaxed),
    )
}

/// Run the format command.
pub fn run_format(args: &[String]) {
    let mut config = FormatConfig::default();
    let mut paths: Vec<String> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--check" => config.check = true,
            "--stdin" => config.stdin = true,
            "--help" | "-h" => {
                print_fmt_help();
                return;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {arg}");
                eprintln!("Run 'bmod fmt --help' for usage");
                std::process::exit(1);
            }
            _ => paths.push(arg.clone()),
        }
    }

    if config.stdin {
        if !paths.is_empty() {
            eprintln!("Cannot specify paths with --stdin");
            std::process::exit(1);
        }
        if config.check {
            eprintln!("Cannot use --check with --stdin");
            std::process::exit(1);
        }
        if !format_stdin() {
            std::process::exit(1);
        }
        return;
    }

    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut total_formatted = 0;
    let mut total_unchanged = 0;

    for path in &paths {
        let path_obj = PathBuf::from(path);

        if path_obj.is_file() {
            match format_file(path, &config) {
                FormatResult::Formatted => {
                    if !config.check {
                        println!("Formatted: {path}");
                    }
                    total_formatted += 1;
                }
                FormatResult::WouldFormat => {
                    if config.check {
                        println!("Would format: {path}");
                    }
                    total_formatted += 1;
                }
                FormatResult::Unchanged => {
                    total_unchanged += 1;
                }
            }
        } else if path_obj.is_dir() {
            let (formatted, unchanged) = format_directory(path, &config);
            total_formatted += formatted;
            total_unchanged += unchanged;
        } else {
            eprintln!("Path not found: {path}");
            std::process::exit(1);
        }
    }

    // Print summary for directory operations
    if paths.len() > 1 || paths.iter().any(|p| PathBuf::from(p).is_dir()) {
        let verb = if config.check {
            "would format"
        } else {
            "formatted"
        };
        if total_formatted > 0 || total_unchanged > 0 {
            println!("\n{total_formatted} {verb}, {total_unchanged} unchanged");
        }
    }

    // Exit with error code if check mode found unformatted files
    if config.check && total_formatted > 0 {
        std::process::exit(1);
    }
}

fn print_fmt_help() {
    println!("Pretty-print mod files");
    println!();
    println!("Usage: bmod fmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths        Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check      Check if files are formatted (exit 1 if not)");
    println!("  --stdin      Read from stdin, write to stdout");
    println!("  --help       Show this help message");
    println!();
    println!("Directories are scanned recursively for .blcm and .txt files;");
    println!("hidden files and directories are skipped.");
    println!();
    println!("Examples:");
    println!("  bmod fmt patch.txt         # Format a single file");
    println!("  bmod fmt mods/             # Format all mod files in mods/");
    println!("  bmod fmt --check mods/     # Check formatting in CI");
    println!("  cat patch.txt | bmod fmt --stdin   # Format stdin to stdout");
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
