/// Flowcanvas: visual workflow builder backend
///
/// Main entry point for the flowcanvas server. Initializes configuration and
/// starts the HTTP server.

use flowcanvas::{config::Config, server::start_server};

/// Application entry point
///
/// Initializes the server with default configuration and starts listening
/// for requests. The server provides:
/// - The builder page at /
/// - Workflow document API at /api/workflow/*
/// - Tool catalog at /api/tools
/// - Layout persistence at /api/layout/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:5000 and the workflows directory)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
