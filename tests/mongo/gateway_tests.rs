//! Connection lifecycle tests against a live store.

use super::helpers::{BoxError, settings_for, start};
use std::time::Duration;
use testcontainers_modules::{mongo::Mongo, testcontainers::runners::AsyncRunner};
use taskflow::task::adapters::mongo::{MongoGateway, StorageError, StoreSettings};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn connect_is_idempotent_and_disconnect_releases() -> Result<(), BoxError> {
    let context = start().await?;
    assert!(context.gateway.is_connected());

    context.gateway.connect().await?;
    assert!(context.gateway.collection().is_ok());

    context.gateway.disconnect().await;
    assert!(!context.gateway.is_connected());
    assert!(matches!(
        context.gateway.collection(),
        Err(StorageError::NotConnected)
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires Docker"]
async fn concurrent_connects_share_one_connection() -> Result<(), BoxError> {
    let container = Mongo::default().start().await?;
    let gateway = MongoGateway::new(settings_for(&container).await?);

    let (first, second) = tokio::join!(gateway.connect(), gateway.connect());
    first?;
    second?;
    assert!(gateway.is_connected());

    gateway.disconnect().await;
    assert!(!gateway.is_connected());
    gateway.disconnect().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_connects_to_unreachable_store_both_fail() {
    let gateway = MongoGateway::new(StoreSettings {
        url: "mongodb://127.0.0.1:1".to_owned(),
        server_selection_timeout: Some(Duration::from_millis(200)),
        ..StoreSettings::default()
    });

    let (first, second) = tokio::join!(gateway.connect(), gateway.connect());

    assert!(matches!(first, Err(StorageError::Connect { .. })));
    assert!(matches!(second, Err(StorageError::Connect { .. })));
    assert!(!gateway.is_connected());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_fails_loudly() {
    let gateway = MongoGateway::new(StoreSettings {
        url: "mongodb://127.0.0.1:1".to_owned(),
        server_selection_timeout: Some(Duration::from_millis(200)),
        ..StoreSettings::default()
    });

    let result = gateway.connect().await;

    assert!(matches!(result, Err(StorageError::Connect { .. })));
    assert!(!gateway.is_connected());
}
