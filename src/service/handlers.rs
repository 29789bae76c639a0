//! HTTP surface of the number service.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::health::HealthStatus;
use crate::observability::metrics;
use crate::service::error::ServiceError;
use crate::service::state::FailureInjectingService;

/// Body of a successful `GET /rng`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResponse {
    pub number: u32,
}

/// Routes for the number service, with the instance injected as state.
pub fn router(service: Arc<FailureInjectingService>) -> Router {
    Router::new()
        .route("/rng", get(rng))
        .route("/health", get(health))
        .with_state(service)
}

/// `GET /rng`
pub async fn rng(
    State(service): State<Arc<FailureInjectingService>>,
) -> Result<Json<NumberResponse>, ServiceError> {
    let number = service.produce_value()?;
    tracing::debug!(number, produced = service.success_count(), "Value produced");
    Ok(Json(NumberResponse { number }))
}

/// `GET /health`
pub async fn health(State(service): State<Arc<FailureInjectingService>>) -> HealthStatus {
    let status = service.health();
    metrics::record_health_check(status);
    status
}
