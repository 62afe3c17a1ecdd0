//! Storage document schema for tasks and its mapping to the domain type.

use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Priority, Task, TaskChanges, TaskId, TaskPatch, TaskStatus,
        format_timestamp, parse_timestamp,
    },
    ports::TaskRepositoryError,
};
use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Task as persisted in the `tasks` collection.
///
/// Carries the store's native `_id`; it is converted to a string
/// [`TaskId`] before anything leaves the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Native store identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Task title.
    pub title: String,
    /// Optional description, stored as null when absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Status in canonical form (`PENDING`, ...).
    pub status: String,
    /// Priority in canonical form (`LOW`, ...).
    pub priority: String,
    /// Creation time as ISO 8601 UTC text.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Modification time as ISO 8601 UTC text.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl TaskDocument {
    /// Builds the document inserted for a new task.
    #[must_use]
    pub fn from_new(id: TaskId, draft: &NewTask) -> Self {
        Self {
            id: id.into_inner(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.as_str().to_owned(),
            priority: draft.priority.as_str().to_owned(),
            created_at: format_timestamp(draft.created_at),
            updated_at: format_timestamp(draft.updated_at),
        }
    }
}

impl TryFrom<TaskDocument> for Task {
    type Error = TaskRepositoryError;

    fn try_from(document: TaskDocument) -> Result<Self, Self::Error> {
        let TaskDocument {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at,
        } = document;

        let parsed_status =
            TaskStatus::try_from(status.as_str()).map_err(|err| corrupt(&id, err))?;
        let parsed_priority =
            Priority::try_from(priority.as_str()).map_err(|err| corrupt(&id, err))?;
        let created = parse_timestamp(&created_at).map_err(|err| corrupt(&id, err))?;
        let updated = parse_timestamp(&updated_at).map_err(|err| corrupt(&id, err))?;

        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::from_object_id(id),
            title,
            description,
            status: parsed_status,
            priority: parsed_priority,
            created_at: created,
            updated_at: updated,
        }))
    }
}

fn corrupt(id: &ObjectId, reason: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::corrupt(id.to_hex(), reason.to_string())
}

/// Maps a stored document to a task, or `None` when it cannot be read.
///
/// Unreadable documents are logged and treated as absent so that one bad
/// record never hides the rest of the collection.
#[must_use]
pub fn readable(document: TaskDocument) -> Option<Task> {
    Task::try_from(document)
        .inspect_err(|err| tracing::warn!(error = %err, "skipping unreadable task document"))
        .ok()
}

/// Builds the `$set` body for a partial update.
///
/// Only changed fields are included; `updatedAt` is always present.
#[must_use]
pub fn set_document(patch: &TaskPatch) -> Document {
    let TaskChanges {
        title,
        description,
        status,
        priority,
    } = &patch.changes;

    let mut set = Document::new();
    if let Some(new_title) = title {
        set.insert("title", new_title.as_str());
    }
    if let Some(new_description) = description {
        set.insert("description", new_description.as_str());
    }
    if let Some(new_status) = status {
        set.insert("status", new_status.as_str());
    }
    if let Some(new_priority) = priority {
        set.insert("priority", new_priority.as_str());
    }
    set.insert("updatedAt", format_timestamp(patch.updated_at));
    set
}
