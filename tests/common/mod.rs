//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::time::Duration;

use flaky_rng::client::{self, ResilientClient};
use flaky_rng::config::TimeoutConfig;
use flaky_rng::lifecycle::Shutdown;
use flaky_rng::service::{self, FailureInjectingService};
use flaky_rng::HttpServer;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A running component. Dropping it stops the server.
pub struct Running {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl Running {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start the number service with the full middleware stack.
pub async fn start_service(threshold: u64) -> (Running, Arc<FailureInjectingService>) {
    let rng = Arc::new(FailureInjectingService::new(NonZeroU64::new(threshold).unwrap()));
    let running = start_server("rng-service", service::router(rng.clone())).await;
    (running, rng)
}

/// Start the greeter pointed at `upstream`.
pub async fn start_greeter(upstream: SocketAddr, request_timeout: Duration) -> Running {
    let resilient =
        ResilientClient::new(&upstream.to_string(), Duration::from_millis(500), request_timeout)
            .unwrap();
    start_server("greeter", client::router(Arc::new(resilient))).await
}

async fn start_server(name: &'static str, app: axum::Router) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(name, app, &TimeoutConfig::default());
    let server_shutdown = shutdown.listener();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    Running { addr, shutdown }
}

/// Start a programmable raw-TCP backend and return its address.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Read (and ignore) the request head before answering.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// HTTP client that bypasses any proxy settings of the test environment.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
