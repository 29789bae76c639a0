//! Startup orchestration shared by the HTTP binaries.
//!
//! Order: metrics exporter → bind listener → signal handling → serve.
//! Any startup error is fatal; the listener is bound last so traffic only
//! arrives once everything else is ready.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Serve `app` on `bind_address` until SIGTERM/SIGINT, then drain and return.
pub async fn serve(
    name: &'static str,
    bind_address: &str,
    app: Router,
    config: &AppConfig,
) -> Result<(), std::io::Error> {
    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(metrics_address = %addr, error = %e, "Failed to parse metrics address"),
        }
    }

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(server = name, address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signals = shutdown.trigger_on_signal();

    let server = HttpServer::new(name, app, &config.timeouts);
    let result = server.run(listener, shutdown.listener()).await;

    signals.abort();
    result
}
