//! Domain model for task management.
//!
//! The task domain models the single task entity, its enumerated status and
//! priority values, and the partial-update shapes applied to it, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;
mod timestamp;

pub use error::{ParseTaskEnumError, TaskDomainError};
pub use ids::TaskId;
pub use task::{NewTask, PersistedTaskData, Priority, Task, TaskChanges, TaskPatch, TaskStatus};
pub use timestamp::{format_timestamp, now, parse_timestamp};
