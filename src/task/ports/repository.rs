//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every task returned by an implementation is fully formed; a stored record
/// that cannot be mapped is treated as absent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it under its store-assigned identifier.
    async fn insert(&self, draft: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns all tasks, newest first by creation time.
    ///
    /// When `status` is set only tasks with exactly that status are returned.
    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Atomically merges `patch` into the task and returns the result.
    ///
    /// Returns `None` when the task does not exist.
    async fn apply(&self, id: &TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task, returning whether a record was actually deleted.
    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store connection has not been established.
    #[error("document store is not connected")]
    NotConnected,

    /// A freshly written record could not be mapped back to a task.
    #[error("stored task {id} is corrupt: {reason}")]
    CorruptDocument {
        /// Identifier of the offending record.
        id: String,
        /// Why the mapping failed.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a corrupt-document error.
    pub fn corrupt(id: impl ToString, reason: impl ToString) -> Self {
        Self::CorruptDocument {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}
