//! Container and gateway setup for document-store tests.

use std::sync::Arc;
use std::time::Duration;
use taskflow::task::adapters::mongo::{MongoGateway, StoreSettings};
use testcontainers_modules::{
    mongo::Mongo,
    testcontainers::{ContainerAsync, runners::AsyncRunner},
};

/// Boxed error used by fallible setup helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Running store container with a connected gateway.
pub struct MongoContext {
    /// Connected gateway.
    pub gateway: Arc<MongoGateway>,
    _container: ContainerAsync<Mongo>,
}

/// Settings pointing at the container's mapped port.
///
/// # Errors
///
/// Returns an error when the container's host or port cannot be resolved.
pub async fn settings_for(container: &ContainerAsync<Mongo>) -> Result<StoreSettings, BoxError> {
    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(27017).await?;
    Ok(StoreSettings {
        url: format!("mongodb://{host}:{port}"),
        database: format!("taskflow_test_{}", mongodb::bson::oid::ObjectId::new().to_hex()),
        server_selection_timeout: Some(Duration::from_secs(10)),
    })
}

/// Starts a container and connects a gateway to it.
///
/// # Errors
///
/// Returns an error when the container does not start or the gateway cannot
/// connect.
pub async fn start() -> Result<MongoContext, BoxError> {
    let container = Mongo::default().start().await?;
    let gateway = Arc::new(MongoGateway::new(settings_for(&container).await?));
    gateway.connect().await?;
    Ok(MongoContext {
        gateway,
        _container: container,
    })
}
