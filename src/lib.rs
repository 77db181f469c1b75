//! Greet API - a minimal greeting HTTP service
//!
//! This library provides the greeting endpoints, the Swagger documentation
//! surface, and the server lifecycle handling (background listener, signal
//! wait, bounded-deadline drain).

pub mod api;
pub mod config;
pub mod docs;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use server::Server;
pub use utils::signals::shutdown_signal;
