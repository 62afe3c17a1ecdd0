//! Runs the Taskflow graph API server.
//!
//! Usage:
//!
//! ```text
//! MONGODB_URL=mongodb://localhost:27017 MONGODB_DB=taskflow taskflow
//! ```
//!
//! The process connects to the document store once at startup, serves
//! `/graphql` until interrupted, then releases the connection.

use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use taskflow::{
    api::{build_schema, shared_service},
    config::Settings,
    server,
    task::adapters::mongo::{MongoGateway, MongoTaskRepository},
    telemetry,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init();
    let settings = Settings::from_env().wrap_err("load settings")?;
    let address = settings.bind_address()?;

    let gateway = Arc::new(MongoGateway::new(settings.store_settings()));
    gateway
        .connect()
        .await
        .wrap_err("connect to document store")?;

    let service = shared_service(
        Arc::new(MongoTaskRepository::new(Arc::clone(&gateway))),
        Arc::new(DefaultClock),
    );
    let app = server::router(build_schema(service), &settings.cors_origins())?;
    let listener = TcpListener::bind(address)
        .await
        .wrap_err_with(|| format!("bind {address}"))?;

    let served = server::serve(listener, app, shutdown_signal()).await;
    gateway.disconnect().await;
    served.wrap_err("serve graph API")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
