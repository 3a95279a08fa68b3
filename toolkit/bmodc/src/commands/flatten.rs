//! The `flatten` command: collapse mod code to game-console form.
//!
//! By default every statement collapses to a single line with all spacing
//! stripped outside quotes. With `--inner=N`, only bracket groups up to
//! depth N (counted from the innermost level) collapse, keeping the outer
//! structure readable.

use std::io::Read;

use super::read_file;

/// Configuration for the flatten command.
#[derive(Default)]
pub struct FlattenConfig {
    /// Collapse only bracket groups up to this depth instead of
    /// flattening each statement completely.
    pub inner: Option<usize>,
    /// Read from stdin instead of a file.
    pub stdin: bool,
}

/// Flatten mod code according to the config.
fn flatten(content: &str, config: &FlattenConfig) -> String {
    match config.inner {
        Some(n) => bmod_fmt::deformat_inner_brackets(content, n),
        None => bmod_fmt::split_into_deformatted_parts(content).join("\n"),
    }
}

/// Run the flatten command.
pub fn run_flatten(args: &[String]) {
    let mut config = FlattenConfig::default();
    let mut paths: Vec<String> = Vec::new();

    for arg in args {
        if let Some(n) = arg.strip_prefix("--inner=") {
            let Ok(n) = n.parse::<usize>() else {
                eprintln!("error: --inner expects a number, got '{n}'");
                std::process::exit(1);
            };
            config.inner = Some(n);
        } else if arg == "--stdin" {
            config.stdin = true;
        } else if arg == "--help" || arg == "-h" {
            print_flatten_help();
            return;
        } else if arg.starts_with('-') {
            eprintln!("Unknown option: {arg}");
            eprintln!("Run 'bmod flatten --help' for usage");
            std::process::exit(1);
        } else {
            paths.push(arg.clone());
        }
    }

    let content = if config.stdin {
        if !paths.is_empty() {
            eprintln!("Cannot specify paths with --stdin");
            std::process::exit(1);
        }
        let mut content = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut content) {
            eprintln!("Error reading from stdin: {e}");
            std::process::exit(1);
        }
        content
    } else {
        let [path] = paths.as_slice() else {
            eprintln!("Usage: bmod flatten <file> [--inner=N]");
            std::process::exit(1);
        };
        read_file(path)
    };

    println!("{}", flatten(&content, &config));
}

fn print_flatten_help() {
    println!("Collapse mod code to game-console form");
    println!();
    println!("Usage: bmod flatten [options] <file>");
    println!();
    println!("Options:");
    println!("  --inner=N    Collapse only bracket groups up to depth N,");
    println!("               counted from the innermost level");
    println!("  --stdin      Read from stdin instead of a file");
    println!("  --help       Show this help message");
    println!();
    println!("Examples:");
    println!("  bmod flatten patch.txt             # One line per statement");
    println!("  bmod flatten patch.txt --inner=2   # Keep outer structure");
    println!("  cat patch.txt | bmod flatten --stdin");
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_flatten_yields_one_line_per_statement() {
        let code = "set foo bar\n(\n    baz = frotz\n)\nset other field value";
        let config = FlattenConfig::default();
        assert_eq!(
            flatten(code, &config),
            "set foo bar (baz=frotz)\nset other field value"
        );
    }

    #[test]
    fn inner_flatten_keeps_outer_structure() {
        let code = "set foo bar (attr=foo,attr2=(3,4),attr3=(one=two))";
        let config = FlattenConfig {
            inner: Some(1),
            ..FlattenConfig::default()
        };
        assert_eq!(
            flatten(code, &config),
            "set foo bar\n(\n    attr = foo,\n    attr2 =(3,4),\n    attr3 =(one=two)\n)"
        );
    }

    #[test]
    fn comments_pass_through() {
        let code = "# header\nset foo bar baz";
        let config = FlattenConfig::default();
        assert_eq!(flatten(code, &config), "# header\nset foo bar baz");
    }
}
