/// Workflow document REST endpoints
///
/// Save, load, template listing, delete, and the execute stub. Failures
/// propagate as StoreError and surface through its IntoResponse mapping as
/// `{status:"error", message}` with the matching HTTP status.

use crate::{
    catalog::ToolCatalog,
    error::StoreError,
    layout::LayoutStore,
    workflow::{store::WorkflowStore, types::{SaveWorkflowRequest, Template}},
};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Read-only tool catalog for the palette
    pub catalog: Arc<ToolCatalog>,
    /// Workflow document store
    pub workflows: Arc<WorkflowStore>,
    /// Per-session layout store
    pub layouts: Arc<LayoutStore>,
    /// Signing key for the session cookie
    pub cookie_key: Key,
}

impl axum::extract::FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// Request body for workflow deletion
#[derive(Debug, Deserialize)]
pub struct DeleteWorkflowRequest {
    #[serde(default)]
    pub name: String,
}

/// Create workflow document routes
pub fn create_workflow_routes() -> Router<AppState> {
    Router::new()
        .route("/api/workflow/save", post(save_workflow))
        .route("/api/workflow/load/{id}", get(load_workflow))
        .route("/api/workflow/templates", get(list_templates))
        .route("/api/workflow/delete", post(delete_workflow))
        .route("/api/workflow/execute", post(execute_workflow))
}

/// Persist a workflow document to disk
///
/// POST /api/workflow/save
/// Body: { "name"?: "...", "nodes"?: [...], "connections"?: [...], "meta"?: {...} }
async fn save_workflow(
    State(state): State<AppState>,
    Json(payload): Json<SaveWorkflowRequest>,
) -> Result<Json<Value>, StoreError> {
    let saved = state.workflows.save(payload).await?;

    Ok(Json(json!({
        "status": "success",
        "message": format!("Workflow saved as {}", saved.filename),
        "file_path": saved.file_path,
        "filename": saved.filename,
    })))
}

/// Resolve a workflow or template by id
///
/// GET /api/workflow/load/{id}
async fn load_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StoreError> {
    let document = state.workflows.load(&id).await?;
    Ok(Json(document))
}

/// List the built-in templates
///
/// GET /api/workflow/templates
async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.workflows.list_templates())
}

/// Delete a saved workflow file by name
///
/// POST /api/workflow/delete
/// Body: { "name": "..." }
async fn delete_workflow(
    State(state): State<AppState>,
    Json(payload): Json<DeleteWorkflowRequest>,
) -> Result<Json<Value>, StoreError> {
    let deleted_file = state.workflows.delete(&payload.name)?;

    Ok(Json(json!({
        "status": "success",
        "message": format!("Workflow '{}' deleted successfully", payload.name),
        "deleted_file": deleted_file,
    })))
}

/// Acknowledge an execution request without running anything
///
/// POST /api/workflow/execute
/// There is no execution engine; this endpoint only confirms receipt so the
/// UI's run button has something to talk to. No store is touched.
async fn execute_workflow(Json(_workflow): Json<Value>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Workflow execution started",
    }))
}
