//! Document-store adapters for task persistence.

mod document;
mod gateway;
mod repository;

pub use document::TaskDocument;
pub use gateway::{
    DEFAULT_DATABASE, DEFAULT_URL, MongoGateway, StorageError, StoreSettings, TASK_COLLECTION,
};
pub use repository::MongoTaskRepository;
