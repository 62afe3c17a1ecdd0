//! Document-store repository implementation for task storage.

use super::document::{readable, set_document};
use super::{MongoGateway, TaskDocument};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc},
    options::ReturnDocument,
};
use std::sync::Arc;

/// Document-store-backed task repository.
#[derive(Debug, Clone)]
pub struct MongoTaskRepository {
    gateway: Arc<MongoGateway>,
}

impl MongoTaskRepository {
    /// Creates a repository over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<MongoGateway>) -> Self {
        Self { gateway }
    }

    fn collection(&self) -> TaskRepositoryResult<Collection<TaskDocument>> {
        Ok(self.gateway.collection()?)
    }
}

fn by_id(id: &TaskId) -> Document {
    doc! { "_id": id.into_inner() }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    async fn insert(&self, draft: NewTask) -> TaskRepositoryResult<Task> {
        let collection = self.collection()?;
        let document = TaskDocument::from_new(TaskId::generate(), &draft);
        collection
            .insert_one(&document)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Task::try_from(document)
    }

    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>> {
        let collection = self.collection()?;
        let filter = status.map_or_else(Document::new, |wanted| {
            doc! { "status": wanted.as_str() }
        });
        let documents: Vec<TaskDocument> = collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(TaskRepositoryError::persistence)?
            .try_collect()
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Ok(documents.into_iter().filter_map(readable).collect())
    }

    async fn find(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let collection = self.collection()?;
        let document = collection
            .find_one(by_id(id))
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Ok(document.and_then(readable))
    }

    async fn apply(&self, id: &TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        let collection = self.collection()?;
        let document = collection
            .find_one_and_update(by_id(id), doc! { "$set": set_document(patch) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Ok(document.and_then(readable))
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<bool> {
        let collection = self.collection()?;
        let result = collection
            .delete_one(by_id(id))
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Ok(result.deleted_count > 0)
    }
}
