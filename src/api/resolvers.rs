//! Query and mutation roots.

use super::{CreateTaskInput, SharedTaskService, TaskObject, TaskStatusValue, UpdateTaskInput};
use crate::task::{domain::TaskStatus, services::CreateTaskRequest};
use async_graphql::{Context, ID, Object, Result};

fn service<'a>(ctx: &Context<'a>) -> Result<&'a SharedTaskService> {
    ctx.data::<SharedTaskService>()
}

/// Read operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All tasks, newest first, optionally filtered by status.
    async fn tasks(
        &self,
        ctx: &Context<'_>,
        status: Option<TaskStatusValue>,
    ) -> Result<Vec<TaskObject>> {
        let tasks = service(ctx)?
            .find_all(status.map(TaskStatus::from))
            .await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// A single task, or null when the id does not resolve.
    async fn task(&self, ctx: &Context<'_>, id: ID) -> Result<Option<TaskObject>> {
        let task = service(ctx)?.find_by_id(id.as_str()).await?;
        Ok(task.map(TaskObject::from))
    }
}

/// Write operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Creates a pending task.
    async fn create_task(&self, ctx: &Context<'_>, input: CreateTaskInput) -> Result<TaskObject> {
        let request = CreateTaskRequest::new(input.title, input.priority.into())
            .with_optional_description(input.description);
        let task = service(ctx)?.create(request).await?;
        Ok(task.into())
    }

    /// Merges the given fields into a task; fails when the id does not resolve.
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTaskInput,
    ) -> Result<TaskObject> {
        let task = service(ctx)?
            .update_existing(id.as_str(), input.into())
            .await?;
        Ok(task.into())
    }

    /// Deletes a task; fails when the id does not resolve.
    async fn delete_task(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        Ok(service(ctx)?.delete_existing(id.as_str()).await?)
    }
}
