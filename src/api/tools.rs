/// Tool catalog endpoint
///
/// Serves the node palette to the canvas UI. The catalog was loaded (or
/// degraded to empty) at startup; this endpoint never fails.

use crate::api::workflows::AppState;
use crate::catalog::ToolDefinition;
use axum::{extract::State, response::Json, routing::get, Router};

/// Create tool catalog routes
pub fn create_tool_routes() -> Router<AppState> {
    Router::new().route("/api/tools", get(list_tools))
}

/// GET /api/tools
async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.catalog.tools().to_vec())
}
