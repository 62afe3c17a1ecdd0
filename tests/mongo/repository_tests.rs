//! Repository contract tests against a live store.

use super::helpers::{BoxError, start};
use crate::test_helpers::SteppingClock;
use mongodb::bson::{Document, doc, oid::ObjectId};
use std::sync::Arc;
use taskflow::task::{
    adapters::mongo::{MongoTaskRepository, TASK_COLLECTION},
    domain::{Priority, TaskChanges, TaskStatus},
    services::{CreateTaskRequest, TaskService},
};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn crud_flow_against_live_store() -> Result<(), BoxError> {
    let context = start().await?;
    let service = TaskService::new(
        Arc::new(MongoTaskRepository::new(Arc::clone(&context.gateway))),
        Arc::new(SteppingClock::new()),
    );

    let created = service
        .create(CreateTaskRequest::new("Draft release notes", Priority::High))
        .await?;
    let id = created.id().to_string();
    assert_eq!(service.find_by_id(&id).await?, Some(created.clone()));

    let updated = service
        .update_existing(&id, TaskChanges::new().with_status(TaskStatus::InProgress))
        .await?;
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.title(), "Draft release notes");
    assert!(updated.updated_at() > created.updated_at());
    assert_eq!(updated.created_at(), created.created_at());

    assert!(service.delete(&id).await?);
    assert_eq!(service.find_by_id(&id).await?, None);
    assert!(!service.delete(&id).await?);
    assert_eq!(service.find_by_id("bad-id").await?, None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn listing_sorts_and_filters_in_the_store() -> Result<(), BoxError> {
    let context = start().await?;
    let service = TaskService::new(
        Arc::new(MongoTaskRepository::new(Arc::clone(&context.gateway))),
        Arc::new(SteppingClock::new()),
    );
    for title in ["first", "second", "third"] {
        service
            .create(CreateTaskRequest::new(title, Priority::Low))
            .await?;
    }
    let newest = service.find_all(None).await?;
    let newest_id = newest.first().map(|task| task.id().to_string());
    if let Some(id) = newest_id {
        service
            .update_existing(&id, TaskChanges::new().with_status(TaskStatus::Completed))
            .await?;
    }

    let titles: Vec<String> = service
        .find_all(None)
        .await?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    let completed = service.find_all(Some(TaskStatus::Completed)).await?;

    assert_eq!(titles, ["third", "second", "first"]);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed.first().map(|task| task.title()), Some("third"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn stored_layout_uses_native_id_and_camel_case_fields() -> Result<(), BoxError> {
    let context = start().await?;
    let repository = MongoTaskRepository::new(Arc::clone(&context.gateway));
    let service = TaskService::new(Arc::new(repository), Arc::new(SteppingClock::new()));
    let created = service
        .create(CreateTaskRequest::new("layout", Priority::Medium))
        .await?;

    let raw = context
        .gateway
        .collection()?
        .clone_with_type::<Document>()
        .find_one(doc! { "_id": created.id().into_inner() })
        .await?
        .ok_or("stored document missing")?;

    assert_eq!(raw.get_str("status")?, "PENDING");
    assert_eq!(raw.get_str("priority")?, "MEDIUM");
    assert!(raw.get_str("createdAt")?.ends_with('Z'));
    assert!(
        raw.get("description")
            .is_some_and(|value| matches!(value, mongodb::bson::Bson::Null))
    );
    assert!(!raw.contains_key("id"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn unreadable_documents_are_skipped_and_offsetless_ones_are_read() -> Result<(), BoxError> {
    let context = start().await?;
    let corrupt_oid = ObjectId::new();
    let legacy_oid = ObjectId::new();
    context
        .gateway
        .collection()?
        .clone_with_type::<Document>()
        .insert_many([
            doc! {
                "_id": corrupt_oid,
                "title": "archived",
                "description": null,
                "status": "ARCHIVED",
                "priority": "LOW",
                "createdAt": "2026-01-01T00:00:00.000000Z",
                "updatedAt": "2026-01-01T00:00:00.000000Z",
            },
            doc! {
                "_id": legacy_oid,
                "title": "legacy",
                "description": null,
                "status": "PENDING",
                "priority": "LOW",
                "createdAt": "2026-01-01T00:00:00.000000",
                "updatedAt": "2026-01-01T00:00:00.000000",
            },
        ])
        .await?;
    let service = TaskService::new(
        Arc::new(MongoTaskRepository::new(Arc::clone(&context.gateway))),
        Arc::new(SteppingClock::new()),
    );
    service
        .create(CreateTaskRequest::new("Draft release notes", Priority::High))
        .await?;

    let titles: Vec<String> = service
        .find_all(None)
        .await?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(titles, ["Draft release notes", "legacy"]);

    assert_eq!(service.find_by_id(&corrupt_oid.to_hex()).await?, None);
    let legacy = service.find_by_id(&legacy_oid.to_hex()).await?;
    assert_eq!(legacy.map(|task| task.status()), Some(TaskStatus::Pending));
    assert_eq!(TASK_COLLECTION, "tasks");
    Ok(())
}
