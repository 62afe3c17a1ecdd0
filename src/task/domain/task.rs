//! Task entity and related value types.

use super::{ParseTaskEnumError, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTaskEnumError {
                kind: "task status",
                value: value.to_owned(),
            }),
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(ParseTaskEnumError {
                kind: "priority",
                value: value.to_owned(),
            }),
        }
    }
}

/// Task entity as handed out to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: Priority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Materialises a new task under a store-assigned identifier.
    #[must_use]
    pub fn from_new(id: TaskId, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a patch into this task.
    ///
    /// Only fields present in the patch are written; `updated_at` is always
    /// replaced.
    pub fn apply(&mut self, patch: &TaskPatch) {
        let TaskChanges {
            title,
            description,
            status,
            priority,
        } = &patch.changes;
        if let Some(new_title) = title {
            self.title.clone_from(new_title);
        }
        if let Some(new_description) = description {
            self.description = Some(new_description.clone());
        }
        if let Some(new_status) = status {
            self.status = *new_status;
        }
        if let Some(new_priority) = priority {
            self.priority = *new_priority;
        }
        self.updated_at = patch.updated_at;
    }
}

/// Fully prepared task awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Task priority.
    pub priority: Priority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Modification timestamp, equal to `created_at` on creation.
    pub updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Prepares a pending task stamped with `timestamp`.
    #[must_use]
    pub fn pending(
        title: impl Into<String>,
        description: Option<String>,
        priority: Priority,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            status: TaskStatus::Pending,
            priority,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// Client-supplied field changes for a partial update.
///
/// `None` means "leave unchanged"; a field cannot be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<Priority>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when no field is changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}

/// Changes stamped with the modification time, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    /// Field changes to merge.
    pub changes: TaskChanges,
    /// New modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskPatch {
    /// Stamps `changes` with `updated_at`.
    #[must_use]
    pub const fn new(changes: TaskChanges, updated_at: DateTime<Utc>) -> Self {
        Self {
            changes,
            updated_at,
        }
    }
}
