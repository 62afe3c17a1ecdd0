//! Connection lifecycle for the task document store.

use super::TaskDocument;
use crate::task::ports::TaskRepositoryError;
use mongodb::{Client, Collection, bson::doc, options::ClientOptions};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

/// Connection string used when none is configured.
pub const DEFAULT_URL: &str = "mongodb://localhost:27017";

/// Database name used when none is configured.
pub const DEFAULT_DATABASE: &str = "taskflow";

/// Name of the collection holding task documents.
pub const TASK_COLLECTION: &str = "tasks";

const APP_NAME: &str = "taskflow";

/// Settings required to reach the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Store connection string.
    pub url: String,
    /// Database holding the task collection.
    pub database: String,
    /// Server selection timeout; `None` keeps the driver default.
    pub server_selection_timeout: Option<Duration>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            database: DEFAULT_DATABASE.to_owned(),
            server_selection_timeout: None,
        }
    }
}

/// Errors raised by the storage gateway.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The gateway was used before [`MongoGateway::connect`] succeeded.
    #[error("document store is not connected")]
    NotConnected,

    /// The connection string or options were rejected by the driver.
    #[error("invalid document store settings: {0}")]
    InvalidSettings(#[source] mongodb::error::Error),

    /// The store could not be reached.
    #[error("failed to reach document store at {url}: {source}")]
    Connect {
        /// Connection string that was used.
        url: String,
        /// Underlying driver error.
        #[source]
        source: mongodb::error::Error,
    },
}

impl From<StorageError> for TaskRepositoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotConnected => Self::NotConnected,
            other => Self::persistence(other),
        }
    }
}

/// Owned handle to the document store.
///
/// Constructed once at startup and shared by the repositories that need it.
/// The client slot is written only by `connect` and `disconnect`; concurrent
/// `connect` calls are serialised so at most one client is ever opened.
#[derive(Debug)]
pub struct MongoGateway {
    settings: StoreSettings,
    client: RwLock<Option<Client>>,
    connecting: Mutex<()>,
}

impl MongoGateway {
    /// Creates a disconnected gateway.
    #[must_use]
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            client: RwLock::new(None),
            connecting: Mutex::new(()),
        }
    }

    /// Returns `true` once a connection has been established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Establishes the connection and verifies the store answers a ping.
    ///
    /// Calling this on a connected gateway is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSettings`] for a rejected connection
    /// string and [`StorageError::Connect`] when the store cannot be reached.
    pub async fn connect(&self) -> Result<(), StorageError> {
        let _connecting = self.connecting.lock().await;
        if self.is_connected() {
            return Ok(());
        }

        let mut options = ClientOptions::parse(self.settings.url.as_str())
            .await
            .map_err(StorageError::InvalidSettings)?;
        options.app_name = Some(APP_NAME.to_owned());
        if let Some(timeout) = self.settings.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }
        let client = Client::with_options(options).map_err(StorageError::InvalidSettings)?;

        client
            .database(&self.settings.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| StorageError::Connect {
                url: self.settings.url.clone(),
                source,
            })?;

        *self.client.write().unwrap_or_else(PoisonError::into_inner) = Some(client);
        tracing::info!(database = %self.settings.database, "connected to document store");
        Ok(())
    }

    /// Releases the connection; does nothing when not connected.
    pub async fn disconnect(&self) {
        let _connecting = self.connecting.lock().await;
        let client = self
            .client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(open) = client {
            open.shutdown().await;
            tracing::info!("disconnected from document store");
        }
    }

    /// Returns the task collection of the configured database.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotConnected`] before `connect` has succeeded
    /// or after `disconnect`.
    pub fn collection(&self) -> Result<Collection<TaskDocument>, StorageError> {
        let guard = self.client.read().unwrap_or_else(PoisonError::into_inner);
        let client = guard.as_ref().ok_or(StorageError::NotConnected)?;
        Ok(client
            .database(&self.settings.database)
            .collection::<TaskDocument>(TASK_COLLECTION))
    }
}
