//! Command values and validation.
//!
//! The classification mirrors what the edit path needs: a statement that
//! validates as a command becomes a [`SetCommand`] or [`SetCmpCommand`];
//! a `set`-shaped statement with too few arguments gets padded where
//! possible; everything else — including actual `#` comments — becomes a
//! [`Comment`].

use thiserror::Error;

use crate::tokenize::split_arguments;

/// Why a statement failed command validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty string not valid")]
    Empty,
    #[error("Command must start with 'set ' or 'set_cmp '")]
    UnknownKeyword,
    #[error("A set command must have 3 arguments (object, field, new value)")]
    SetNeedsValue,
    #[error("A set command must have 2 arguments (object, field)")]
    SetNeedsObjectAndField,
    #[error("A set_cmp command must have 4 arguments (object, field, old value, new value)")]
    SetCmpNeedsArguments,
    #[error("Must have an object")]
    MissingObject,
    #[error("Must have a field")]
    MissingField,
}

/// Checks whether `command` is a well-formed `set` or `set_cmp` command.
///
/// With `allow_empty_value`, a `set` command may omit its value (used
/// when a command is being authored and the value comes later).
pub fn validate_command(command: &str, allow_empty_value: bool) -> Result<(), CommandError> {
    let command = command.trim();
    let words: Vec<&str> = command.split_whitespace().collect();
    let Some(keyword) = words.first() else {
        return Err(CommandError::Empty);
    };
    if keyword.eq_ignore_ascii_case("set") {
        if words.len() < if allow_empty_value { 3 } else { 4 } {
            return Err(if allow_empty_value {
                CommandError::SetNeedsObjectAndField
            } else {
                CommandError::SetNeedsValue
            });
        }
    } else if keyword.eq_ignore_ascii_case("set_cmp") {
        if words.len() < 5 {
            return Err(CommandError::SetCmpNeedsArguments);
        }
    } else {
        return Err(CommandError::UnknownKeyword);
    }
    if words.get(1).is_none_or(|w| w.is_empty()) {
        return Err(CommandError::MissingObject);
    }
    if words.get(2).is_none_or(|w| w.is_empty()) {
        return Err(CommandError::MissingField);
    }
    Ok(())
}

/// A `set <object> <field> <value>` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCommand {
    object: String,
    field: String,
    value: String,
}

impl SetCommand {
    /// Builds a command from its pieces. The object and field must be
    /// non-empty; the value may be empty.
    pub fn new(
        object: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let object = object.into();
        let field = field.into();
        if object.trim().is_empty() {
            return Err(CommandError::MissingObject);
        }
        if field.trim().is_empty() {
            return Err(CommandError::MissingField);
        }
        Ok(Self {
            object,
            field,
            value: value.into(),
        })
    }

    /// Parses a flattened `set ...` statement.
    pub fn parse(command: &str) -> Result<Self, CommandError> {
        let command = command.trim();
        let bytes = command.as_bytes();
        let keyword_ok = bytes.len() >= 4
            && bytes[..3].eq_ignore_ascii_case(b"set")
            && bytes[3].is_ascii_whitespace();
        if !keyword_ok {
            return Err(CommandError::UnknownKeyword);
        }
        let mut args = split_arguments(command, 3);
        let value = args.pop().unwrap_or_default();
        let field = args.pop().unwrap_or_default();
        let object = args.pop().unwrap_or_default();
        Self::new(object, field, value)
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The command in executable form.
    pub fn code(&self) -> String {
        format!("set {} {} {}", self.object, self.field, self.value)
    }
}

/// A `set_cmp <object> <field> <old value> <new value>` command: the
/// assignment only applies when the field currently holds the old value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCmpCommand {
    object: String,
    field: String,
    previous: String,
    value: String,
}

impl SetCmpCommand {
    pub fn new(
        object: impl Into<String>,
        field: impl Into<String>,
        previous: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let object = object.into();
        let field = field.into();
        if object.trim().is_empty() {
            return Err(CommandError::MissingObject);
        }
        if field.trim().is_empty() {
            return Err(CommandError::MissingField);
        }
        Ok(Self {
            object,
            field,
            previous: previous.into(),
            value: value.into(),
        })
    }

    /// Parses a flattened `set_cmp ...` statement.
    pub fn parse(command: &str) -> Result<Self, CommandError> {
        let command = command.trim();
        let bytes = command.as_bytes();
        let keyword_ok = bytes.len() >= 8
            && bytes[..7].eq_ignore_ascii_case(b"set_cmp")
            && bytes[7].is_ascii_whitespace();
        if !keyword_ok {
            return Err(CommandError::UnknownKeyword);
        }
        let mut args = split_arguments(command, 4);
        let value = args.pop().unwrap_or_default();
        let previous = args.pop().unwrap_or_default();
        let field = args.pop().unwrap_or_default();
        let object = args.pop().unwrap_or_default();
        Self::new(object, field, previous, value)
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn code(&self) -> String {
        format!(
            "set_cmp {} {} {} {}",
            self.object, self.field, self.previous, self.value
        )
    }
}

/// A statement that is not a command: a `#` comment line, freeform text,
/// or a command-shaped line too malformed to salvage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One element of a mod: a command or a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModElement {
    Set(SetCommand),
    SetCmp(SetCmpCommand),
    Comment(Comment),
}

/// Whether `s` starts with `prefix` followed by a whitespace character.
fn has_keyword(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
        && s[prefix.len()..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// Classifies one flattened statement.
///
/// A statement that validates fully becomes a command. A `set`/`set_cmp`
/// statement with at least an object and field is padded with empty
/// values; anything else becomes a [`Comment`].
fn element_from_part(part: &str) -> ModElement {
    if validate_command(part, false).is_ok() {
        let parsed = if part.starts_with("set_cmp") {
            SetCmpCommand::parse(part).map(ModElement::SetCmp)
        } else {
            SetCommand::parse(part).map(ModElement::Set)
        };
        if let Ok(element) = parsed {
            return element;
        }
    } else if has_keyword(part, "set_cmp") {
        let words: Vec<&str> = part.split_whitespace().collect();
        if words.len() >= 3 {
            let previous = words.get(3).copied().unwrap_or("");
            if let Ok(command) = SetCmpCommand::new(words[1], words[2], previous, "") {
                return ModElement::SetCmp(command);
            }
        }
    } else if has_keyword(part, "set") {
        let words: Vec<&str> = part.split_whitespace().collect();
        if words.len() >= 3 {
            if let Ok(command) = SetCommand::new(words[1], words[2], "") {
                return ModElement::Set(command);
            }
        }
    }
    ModElement::Comment(Comment::new(part))
}

/// Converts a list of flattened statements into mod elements.
pub fn elements_from_parts<S: AsRef<str>>(parts: &[S]) -> Vec<ModElement> {
    parts
        .iter()
        .map(|part| element_from_part(part.as_ref()))
        .collect()
}

/// Converts raw (possibly multi-line, multi-statement) mod code into mod
/// elements.
pub fn elements_from_code(mod_code: &str) -> Vec<ModElement> {
    elements_from_parts(&bmod_fmt::split_into_parts(mod_code))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
