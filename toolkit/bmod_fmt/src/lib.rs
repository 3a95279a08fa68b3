//! bmod Formatter
//!
//! Formatting and de-formatting for Borderlands-style mod code: the small
//! statement language of `set` / `set_cmp` / `exec` / `say` commands with
//! nested parenthesized structures, quoted strings, comma-separated lists,
//! and `key=value` pairs.
//!
//! # Architecture
//!
//! Everything here is a pure `&str -> String` transform over immutable
//! input. There is no I/O, no shared state, and no failure mode: malformed
//! input (unmatched brackets, unterminated quotes, empty text) degrades to
//! a reasonable default instead of returning an error.
//!
//! # Modules
//!
//! - [`splitter`]: breaks freeform mod code into discrete statement parts
//! - [`format`]: canonical multi-line, indented pretty-printing
//! - [`deformat`]: the inverse — collapse back to single-line form, either
//!   fully or only for the innermost N bracket levels
//! - [`preview`]: truncated single-line-ish rendering for display

pub mod deformat;
pub mod format;
pub mod preview;
pub mod splitter;

pub use deformat::{deformat_code, deformat_inner_brackets, remove_non_quoted_spaces};
pub use format::{format_code, format_single_statement};
pub use preview::{preview, preview_with, DEFAULT_PREVIEW_COLUMNS, DEFAULT_PREVIEW_LINES};
pub use splitter::{split_into_deformatted_parts, split_into_parts, COMMANDS};

/// One level of indentation in formatted output.
pub const INDENT: &str = "    ";
