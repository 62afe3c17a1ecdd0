//! HTTP surface serving the graph API.

use crate::api::TaskflowSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    http::{HeaderValue, header::InvalidHeaderValue},
    response::Html,
    routing::get,
};
use std::future::Future;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Path serving the graph API.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Errors raised while building or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin '{origin}': {source}")]
    InvalidOrigin {
        /// Offending origin.
        origin: String,
        /// Header parse failure.
        #[source]
        source: InvalidHeaderValue,
    },

    /// The listener failed.
    #[error("HTTP server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds a CORS layer admitting exactly `origins`, any method and header.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] for an origin that is not a valid
/// header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| ServerError::InvalidOrigin {
                origin: origin.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Builds the application router.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] when an origin cannot be used.
pub fn router(schema: TaskflowSchema, origins: &[String]) -> Result<Router, ServerError> {
    Ok(Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health_check_handler))
        .layer(cors_layer(origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Io`] when the listener fails.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    if let Ok(address) = listener.local_addr() {
        tracing::info!("graph API listening on http://{address}{GRAPHQL_PATH}");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[tracing::instrument]
async fn health_check_handler() -> &'static str {
    "OK"
}
