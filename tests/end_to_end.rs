//! Greeter and number service wired together over real sockets.

use std::time::Duration;

use axum::http::StatusCode;
use flaky_rng::health::probe_health;
use flaky_rng::HealthStatus;
use url::Url;

mod common;

#[tokio::test]
async fn test_greeter_degrades_when_service_exhausts() {
    let (service, _) = common::start_service(2).await;
    let greeter = common::start_greeter(service.addr, Duration::from_secs(2)).await;
    let client = common::http_client();

    for _ in 0..2 {
        let text = client.get(greeter.url("/")).send().await.unwrap().text().await.unwrap();
        assert!(text.starts_with("Greetings!\n The random number is "), "got {:?}", text);
    }

    let res = client.get(greeter.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Greetings!\n Status error!");

    // The greeter stays alive even though its upstream is not.
    let res = client.get(greeter.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    service.shutdown.trigger();
    greeter.shutdown.trigger();
}

#[tokio::test]
async fn test_probe_tracks_service_health() {
    let (service, rng) = common::start_service(1).await;
    let client = common::http_client();
    let base = Url::parse(&service.url("/")).unwrap();
    let timeout = Duration::from_secs(1);

    assert_eq!(probe_health(&client, &base, timeout).await, HealthStatus::Up);
    assert_eq!(probe_health(&client, &base, timeout).await, HealthStatus::Up);
    assert_eq!(rng.success_count(), 0);

    client.get(service.url("/rng")).send().await.unwrap();
    assert_eq!(probe_health(&client, &base, timeout).await, HealthStatus::Down);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_probe_unreachable_is_down() {
    let addr = common::unused_addr().await;
    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    let status = probe_health(&common::http_client(), &base, Duration::from_millis(500)).await;
    assert_eq!(status, HealthStatus::Down);
}

#[tokio::test]
async fn test_graceful_shutdown_stops_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().route("/health", axum::routing::get(|| async { "Status OK." }));

    let shutdown = flaky_rng::Shutdown::new();
    let server = flaky_rng::HttpServer::new("test", app, &Default::default());
    let handle = tokio::spawn(server.run(listener, shutdown.listener()));

    let client = common::http_client();
    let res = client.get(format!("http://{}/health", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());

    assert!(client.get(format!("http://{}/health", addr)).send().await.is_err());
}
