//! HTTP API module
//!
//! This module contains the greeting endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::docs;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/goodbye", get(goodbye_handler))
        .route("/health", get(health_handler))
        .merge(docs::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
