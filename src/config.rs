//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "greet-api")]
#[command(about = "A minimal greeting HTTP API with Swagger docs and graceful shutdown")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Seconds to wait for in-flight requests to finish on shutdown
    #[arg(short, long, default_value = "15")]
    pub shutdown_timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the shutdown drain deadline as a [`Duration`]
    pub fn shutdown_deadline(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["greet-api"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.shutdown_timeout, 15);
        assert!(!config.verbose);
    }

    #[test]
    fn address_formatting() {
        let config = Config::try_parse_from(["greet-api", "--host", "127.0.0.1", "-p", "9090"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:9090");
    }

    #[test]
    fn shutdown_deadline_from_seconds() {
        let config = Config::try_parse_from(["greet-api", "-s", "3"]).unwrap();
        assert_eq!(config.shutdown_deadline(), Duration::from_secs(3));
    }
}
