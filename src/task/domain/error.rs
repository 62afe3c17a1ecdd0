//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The identifier is not a well-formed store identifier.
    #[error("malformed task identifier '{0}'")]
    MalformedTaskId(String),
}

/// Error returned while parsing task enumerations from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseTaskEnumError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// Raw value that failed to parse.
    pub value: String,
}
