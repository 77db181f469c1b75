//! Greet API - a minimal greeting HTTP service
//!
//! This is the main entry point for the greet-api application.

use tracing::info;

use greet_api::{api::create_router, config::Config, server::Server, utils::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("greet_api={},tower_http=info", config.log_level()))
        .init();

    info!("Starting greet-api server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, shutdown_timeout={}s",
        config.host, config.port, config.shutdown_timeout
    );

    // Create HTTP router with all endpoints
    let app = create_router();

    // Bind and serve in the background; a bind failure is fatal
    let server = Server::start(&config.address(), app).await?;

    info!("Endpoints:");
    info!("  GET /hello              - Fixed greeting");
    info!("  GET /goodbye            - Fixed farewell");
    info!("  GET /health             - Health check");
    info!("  GET /swagger/index.html - API documentation");

    // Block until SIGINT/SIGTERM, then drain within the deadline
    shutdown_signal().await;
    info!("Shutdown signal received, draining in-flight requests");

    server.shutdown(config.shutdown_deadline()).await?;

    info!("Server shutdown complete");
    Ok(())
}
