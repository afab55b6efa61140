/// HTTP API Layer
///
/// This module provides the REST API endpoints for the workflow builder.
/// It handles:
/// - Workflow document save/load/delete and the execute stub
/// - The tool catalog endpoint feeding the palette
/// - Per-session layout persistence with a signed session cookie

// Workflow document endpoints
pub mod workflows;

// Tool catalog endpoint
pub mod tools;

// Layout persistence endpoints
pub mod layout;

// Re-export router builders
pub use layout::create_layout_routes;
pub use tools::create_tool_routes;
pub use workflows::{create_workflow_routes, AppState};
