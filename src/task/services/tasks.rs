//! Service layer for task creation, lookup, update and deletion.

use super::IdLookup;
use crate::task::{
    domain::{NewTask, Priority, Task, TaskChanges, TaskId, TaskPatch, TaskStatus, now},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets or clears the task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The addressed task does not exist (or its identifier is malformed).
    #[error("Task with id {0} not found")]
    NotFound(String),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management service.
///
/// Stamps timestamps from the injected clock and resolves the raw string
/// identifiers handed in by clients. Malformed identifiers never reach the
/// repository; they resolve to [`IdLookup::MalformedId`].
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending task with both timestamps set to now.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store rejects the
    /// insert.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
        } = request;
        let draft = NewTask::pending(title, description, priority, now(&*self.clock));
        let task = self.repository.insert(draft).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns all tasks, newest first, optionally restricted to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(status).await?)
    }

    /// Resolves a raw identifier to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, raw_id: &str) -> TaskServiceResult<IdLookup<Task>> {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(malformed) => return Ok(malformed),
        };
        Ok(self.repository.find(&id).await?.into())
    }

    /// Finds a task by raw identifier.
    ///
    /// Malformed and unknown identifiers both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, raw_id: &str) -> TaskServiceResult<Option<Task>> {
        Ok(self.lookup(raw_id).await?.found())
    }

    /// Atomically merges `changes` into a task and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the update fails.
    #[tracing::instrument(skip(self))]
    pub async fn apply_update(
        &self,
        raw_id: &str,
        changes: TaskChanges,
    ) -> TaskServiceResult<IdLookup<Task>> {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(malformed) => return Ok(malformed),
        };
        let patch = TaskPatch::new(changes, now(&*self.clock));
        Ok(self.repository.apply(&id, &patch).await?.into())
    }

    /// Updates a task by raw identifier.
    ///
    /// Malformed and unknown identifiers both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the update fails.
    pub async fn update(
        &self,
        raw_id: &str,
        changes: TaskChanges,
    ) -> TaskServiceResult<Option<Task>> {
        Ok(self.apply_update(raw_id, changes).await?.found())
    }

    /// Updates a task that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier does not
    /// resolve and [`TaskServiceError::Repository`] when the update fails.
    pub async fn update_existing(
        &self,
        raw_id: &str,
        changes: TaskChanges,
    ) -> TaskServiceResult<Task> {
        self.update(raw_id, changes)
            .await?
            .ok_or_else(|| TaskServiceError::NotFound(raw_id.to_owned()))
    }

    /// Removes a task by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the delete fails.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, raw_id: &str) -> TaskServiceResult<IdLookup<()>> {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(malformed) => return Ok(malformed),
        };
        let removed = self.repository.remove(&id).await?;
        Ok(removed.then_some(()).into())
    }

    /// Deletes a task, returning whether a record was removed.
    ///
    /// Malformed and unknown identifiers both yield `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the delete fails.
    pub async fn delete(&self, raw_id: &str) -> TaskServiceResult<bool> {
        Ok(self.remove(raw_id).await?.is_found())
    }

    /// Deletes a task that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when nothing was removed and
    /// [`TaskServiceError::Repository`] when the delete fails.
    pub async fn delete_existing(&self, raw_id: &str) -> TaskServiceResult<bool> {
        if self.delete(raw_id).await? {
            Ok(true)
        } else {
            Err(TaskServiceError::NotFound(raw_id.to_owned()))
        }
    }
}

fn parse_id<T>(raw_id: &str) -> Result<TaskId, IdLookup<T>> {
    TaskId::parse(raw_id).map_err(|err| {
        tracing::debug!(%err, "treating malformed task identifier as not found");
        IdLookup::MalformedId(raw_id.to_owned())
    })
}
