//! HTTP endpoint handlers

use axum::response::Json;
use tracing::info;

use super::responses::{HealthResponse, Message};

/// Handle GET /hello - Return the fixed greeting
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Fixed greeting message", body = Message))
)]
pub async fn hello_handler() -> Json<Message> {
    info!("Hello endpoint called");
    Json(Message::new("Hello, World!"))
}

/// Handle GET /goodbye - Return the fixed farewell
#[utoipa::path(
    get,
    path = "/goodbye",
    responses((status = 200, description = "Fixed farewell message", body = Message))
)]
pub async fn goodbye_handler() -> Json<Message> {
    info!("Goodbye endpoint called");
    Json(Message::new("Goodbye, World!"))
}

/// Handle GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
