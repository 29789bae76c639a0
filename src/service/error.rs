use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by the number service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Permanent for this instance. Callers should not retry against it.
    #[error("success budget exhausted after {produced} values (threshold {threshold})")]
    Exhausted { produced: u64, threshold: u64 },
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error getting value");
        (StatusCode::INTERNAL_SERVER_ERROR, "Error getting value").into_response()
    }
}
