//! bmod Command Model
//!
//! Turns flattened mod-code statements into typed command values. This is
//! the layer where validation lives: the formatter below it never fails,
//! while anything here that doesn't parse as a recognized command degrades
//! to a [`Comment`].
//!
//! # Modules
//!
//! - [`command`]: `set` / `set_cmp` command values, comments, validation
//! - [`tokenize`]: command-aware argument splitting (quotes and bracket
//!   depth suppress whitespace breaks)

pub mod command;
pub mod tokenize;

pub use command::{
    elements_from_code, elements_from_parts, validate_command, Comment, CommandError, ModElement,
    SetCmpCommand, SetCommand,
};
pub use tokenize::split_arguments;
