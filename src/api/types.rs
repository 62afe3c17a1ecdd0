//! Graph types mirroring the task domain.

use crate::task::domain::{Priority, Task, TaskChanges, TaskStatus, format_timestamp};
use async_graphql::{Enum, ID, InputObject, Object};

/// Task progress state.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "TaskStatus", remote = "crate::task::domain::TaskStatus")]
pub enum TaskStatusValue {
    /// Not started.
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

/// Task urgency.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "Priority", remote = "crate::task::domain::Priority")]
pub enum PriorityValue {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now.
    Urgent,
}

/// Graph representation of a task.
#[derive(Debug, Clone)]
pub struct TaskObject(Task);

impl From<Task> for TaskObject {
    fn from(task: Task) -> Self {
        Self(task)
    }
}

#[Object(name = "Task")]
impl TaskObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn title(&self) -> &str {
        self.0.title()
    }

    async fn description(&self) -> Option<&str> {
        self.0.description()
    }

    async fn status(&self) -> TaskStatusValue {
        self.0.status().into()
    }

    async fn priority(&self) -> PriorityValue {
        self.0.priority().into()
    }

    async fn created_at(&self) -> String {
        format_timestamp(self.0.created_at())
    }

    async fn updated_at(&self) -> String {
        format_timestamp(self.0.updated_at())
    }
}

/// Input for `createTask`.
#[derive(InputObject, Debug, Clone)]
pub struct CreateTaskInput {
    /// Task title; must not be empty.
    #[graphql(validator(min_length = 1))]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Task priority.
    pub priority: PriorityValue,
}

/// Input for `updateTask`; omitted or null fields are left unchanged.
#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateTaskInput {
    /// Replacement title; must not be empty when given.
    #[graphql(validator(min_length = 1))]
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatusValue>,
    /// Replacement priority.
    pub priority: Option<PriorityValue>,
}

impl From<UpdateTaskInput> for TaskChanges {
    fn from(input: UpdateTaskInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            status: input.status.map(TaskStatus::from),
            priority: input.priority.map(Priority::from),
        }
    }
}
