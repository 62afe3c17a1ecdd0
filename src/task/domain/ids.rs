//! Identifier type for the task domain.

use super::TaskDomainError;
use mongodb::bson::oid::ObjectId;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task record.
///
/// Wraps the store-assigned object identifier. Callers only ever see its
/// 24-character hexadecimal string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(ObjectId);

impl TaskId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Creates a task identifier from an existing object identifier.
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Parses the string form handed out to clients.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedTaskId`] when the value is not a
    /// 24-character hexadecimal object identifier.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| TaskDomainError::MalformedTaskId(raw.to_owned()))
    }

    /// Returns the wrapped object identifier.
    #[must_use]
    pub const fn into_inner(self) -> ObjectId {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
