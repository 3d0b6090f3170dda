//! Error types for document mutations.

use std::fmt;
use thiserror::Error;

/// Which naming rule a group or key name violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Blank after trimming whitespace.
    Empty,
    /// Contains a newline character.
    Newline,
    /// Contains `[` or `]` (reserved for group headers and locale-qualified
    /// keys).
    Bracket,
    /// Contains `=` (reserved as the key/value separator).
    Equals,
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRule::Empty => write!(f, "blank after trimming"),
            NameRule::Newline => write!(f, "contains a newline"),
            NameRule::Bracket => write!(f, "contains '[' or ']'"),
            NameRule::Equals => write!(f, "contains '='"),
        }
    }
}

/// Which value rule a written value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Contains a newline character.
    Newline,
    /// Key is declared `Boolean` but the value is not `true`/`false`.
    NotBoolean,
    /// Key is declared `Integer` but the value is not a number.
    NotNumeric,
}

impl fmt::Display for ValueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRule::Newline => write!(f, "contains a newline"),
            ValueRule::NotBoolean => write!(f, "expected 'true' or 'false'"),
            ValueRule::NotNumeric => write!(f, "expected a number"),
        }
    }
}

/// Errors that can occur when mutating an [`IniDocument`].
///
/// Reads never produce errors; absence is reported as `None`.
///
/// [`IniDocument`]: crate::IniDocument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IniError {
    /// A group or key name violates a naming rule.
    #[error("invalid name {name:?}: {rule}")]
    InvalidName { name: String, rule: NameRule },

    /// A value violates the generic value rule or its key's declared type.
    #[error("invalid value {value:?} for key {key:?} in group {group:?}: {rule}")]
    InvalidValue {
        group: String,
        key: String,
        value: String,
        rule: ValueRule,
    },

    /// A removal targeted a group that does not exist.
    #[error("group not found: {0:?}")]
    GroupNotFound(String),

    /// A removal targeted a key that does not exist in its group.
    #[error("key {key:?} not found in group {group:?}")]
    KeyNotFound { group: String, key: String },
}
