//! Graph API contract over the task service.
//!
//! Exposes the `tasks` and `task` queries and the `createTask`, `updateTask`
//! and `deleteTask` mutations. Input validation that the type system cannot
//! express (non-empty titles) happens here, before the service is invoked.

mod resolvers;
mod types;

pub use resolvers::{MutationRoot, QueryRoot};
pub use types::{CreateTaskInput, PriorityValue, TaskObject, TaskStatusValue, UpdateTaskInput};

use crate::task::{ports::TaskRepository, services::TaskService};
use async_graphql::{EmptySubscription, Schema};
use mockable::Clock;
use std::sync::Arc;

/// Task service with type-erased repository and clock, as stored in the schema.
pub type SharedTaskService = TaskService<dyn TaskRepository, dyn Clock + Send + Sync>;

/// Executable graph API schema.
pub type TaskflowSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Erases the repository and clock types of a service.
#[must_use]
pub fn shared_service(
    repository: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
) -> SharedTaskService {
    TaskService::new(repository, clock)
}

/// Builds the schema with `service` available to every resolver.
#[must_use]
pub fn build_schema(service: SharedTaskService) -> TaskflowSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}
