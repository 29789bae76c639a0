//! HTTP surface of the greeter.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::client::error::ClientError;
use crate::client::fetch::ResilientClient;
use crate::client::greeting::render_greeting;

/// Routes for the greeter.
///
/// `/health` never touches the upstream, so a hung fetch on `/` cannot hold
/// up liveness probes.
pub fn router(client: Arc<ResilientClient>) -> Router {
    Router::new()
        .route("/", get(greet))
        .route("/health", get(health))
        .with_state(client)
}

/// `GET /`
pub async fn greet(State(client): State<Arc<ResilientClient>>) -> Result<String, ClientError> {
    let outcome = client.fetch_number().await?;
    Ok(render_greeting(&outcome))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "Status OK."
}
