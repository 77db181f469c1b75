//! Tests for the server lifecycle: bind failure, drain, and the shutdown
//! deadline.

use std::time::Duration;

use axum::{routing::get, Router};
use greet_api::{create_router, Server};

/// Router with a handler that holds the request open for `delay`.
fn slow_router(delay: Duration) -> Router {
    Router::new().route(
        "/slow",
        get(move || async move {
            tokio::time::sleep(delay).await;
            "done"
        }),
    )
}

#[tokio::test]
async fn bind_failure_is_reported() {
    let server = Server::start("127.0.0.1:0", create_router()).await.unwrap();
    let taken = server.local_addr().to_string();

    let result = Server::start(&taken, create_router()).await;
    assert!(result.is_err(), "second bind to {} should fail", taken);

    server.shutdown(Duration::from_secs(5)).await.unwrap();
}

#[tokio::test]
async fn in_flight_request_completes_before_deadline() {
    let server = Server::start("127.0.0.1:0", slow_router(Duration::from_millis(300)))
        .await
        .unwrap();
    let url = format!("http://{}/slow", server.local_addr());

    let request = tokio::spawn(async move { reqwest::get(&url).await });
    // Let the request reach the handler before shutting down
    tokio::time::sleep(Duration::from_millis(100)).await;

    server.shutdown(Duration::from_secs(5)).await.unwrap();

    let response = request.await.unwrap().unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "done");
}

#[tokio::test]
async fn deadline_elapsed_reports_timeout() {
    let server = Server::start("127.0.0.1:0", slow_router(Duration::from_secs(30)))
        .await
        .unwrap();
    let url = format!("http://{}/slow", server.local_addr());

    let request = tokio::spawn(async move { reqwest::get(&url).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let result = server.shutdown(Duration::from_millis(200)).await;
    assert!(result.is_err(), "shutdown should report the forced close");

    request.abort();
}

#[tokio::test]
async fn new_connections_refused_after_shutdown() {
    let server = Server::start("127.0.0.1:0", create_router()).await.unwrap();
    let url = format!("http://{}/hello", server.local_addr());

    server.shutdown(Duration::from_secs(5)).await.unwrap();

    let result = reqwest::get(&url).await;
    assert!(result.is_err(), "server should no longer accept connections");
}
