//! Application services for task management.

mod outcome;
mod tasks;

pub use outcome::IdLookup;
pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
