//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap a component router with the shared middleware stack
//!   (request ID, tracing, request timeout)
//! - Serve it on a bound listener until shutdown is signalled
//! - Drain in-flight requests before returning

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::TimeoutConfig;
use crate::http::request::{request_span, UuidRequestId};
use crate::lifecycle::ShutdownListener;

/// HTTP server for one component (number service or greeter).
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Create a server named `name` (used in logs) around `app`.
    pub fn new(name: &'static str, app: Router, timeouts: &TimeoutConfig) -> Self {
        Self {
            name,
            router: Self::build_router(app, timeouts),
        }
    }

    /// Add the middleware layers. The last layer added runs first.
    #[allow(deprecated)]
    fn build_router(app: Router, timeouts: &TimeoutConfig) -> Router {
        app.layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for driving the stack without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(server = self.name, address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!(server = self.name, "HTTP server stopped");
        Ok(())
    }
}
