/// Server setup and initialization
///
/// Wires together all components: tool catalog, workflow store, layout store,
/// and HTTP routes. Provides the main application factory function for
/// creating the Axum app.

use crate::{
    api::{create_layout_routes, create_tool_routes, create_workflow_routes, AppState},
    catalog::ToolCatalog,
    config::Config,
    layout::LayoutStore,
    workflow::store::WorkflowStore,
};
use anyhow::Result;
use axum::{routing::get, Router};
use axum_extra::extract::cookie::Key;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the main Axum application with all routes and middleware
///
/// Loads the tool catalog (degrading to empty on failure), constructs the
/// store instances, and wires them into the router via shared state. No
/// component lives in a process-wide global; tests build isolated apps over
/// temporary directories.
pub async fn create_app(config: Config) -> Result<Router> {
    // Load the tool catalog; a missing or malformed resource must not stop startup
    tracing::info!("🧰 Loading tool catalog from {}", config.storage.tools_path);
    let catalog = Arc::new(ToolCatalog::load(Path::new(&config.storage.tools_path)));
    if catalog.is_empty() {
        tracing::warn!("Tool catalog is empty - the palette will offer zero tools");
    }

    tracing::info!("📋 Initializing workflow store at {}", config.storage.workflows_dir);
    let workflows = Arc::new(WorkflowStore::new(&config.storage.workflows_dir));

    tracing::info!("🗂️ Initializing layout store");
    let layouts = Arc::new(LayoutStore::new());

    // The cookie key derivation requires a sufficiently long master secret
    if config.session.secret.len() < 32 {
        anyhow::bail!("SESSION_SECRET must be at least 32 bytes");
    }
    let cookie_key = Key::derive_from(config.session.secret.as_bytes());

    let app_state = AppState {
        catalog,
        workflows,
        layouts,
        cookie_key,
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Builder page and canvas assets (plain static files, no templating)
        .route_service("/", ServeFile::new(Path::new(&config.server.static_dir).join("index.html")))
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        // API routes
        .merge(create_workflow_routes())
        .merge(create_tool_routes())
        .merge(create_layout_routes())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting flowcanvas server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
