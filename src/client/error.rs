use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Faults that are not caused by the upstream being unhealthy.
///
/// Network trouble never shows up here; it is folded into
/// [`ClientOutcome::Unavailable`](crate::client::ClientOutcome::Unavailable).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid upstream address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request could not be issued: {0}")]
    Request(#[source] reqwest::Error),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Internal error");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
