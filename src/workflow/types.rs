/// Core workflow document type definitions
///
/// Defines the node/connection/document structures the canvas UI edits and
/// the store persists. These types are serialized/deserialized from JSON
/// both on the wire and on disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single node placed on the canvas
///
/// `node_type` should reference a tool catalog entry, but this is advisory:
/// the catalog schema is UI metadata only, and `properties` are persisted
/// verbatim without validation against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier within the workflow (e.g., "node1")
    pub id: String,
    /// Tool type this node was dragged from (e.g., "http_request")
    #[serde(rename = "type")]
    pub node_type: String,
    /// Canvas position
    pub position: Position,
    /// Tool-specific configuration values, keyed by property name
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Directed connection between two nodes
///
/// Endpoints are free strings. Dangling references to missing node ids are
/// accepted and persisted as-is; nothing checks referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection identifier within the workflow (e.g., "conn1")
    pub id: String,
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
}

/// A complete workflow document as written to disk
///
/// Field order matters for readers diffing saved files: the serialized JSON
/// carries name, nodes, connections, meta, saved_at, file_path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Human-readable workflow name (pre-sanitization)
    pub name: String,
    /// Nodes in canvas order
    pub nodes: Vec<Node>,
    /// Connections in creation order
    pub connections: Vec<Connection>,
    /// Free-form document metadata
    pub meta: Map<String, Value>,
    /// Timestamp assigned at save time
    pub saved_at: DateTime<Utc>,
    /// Resolved on-disk path, embedded in the document itself
    pub file_path: String,
}

/// Save request body for `POST /api/workflow/save`
///
/// Every field is optional; a missing name gets a generated sequence name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveWorkflowRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Nodes and connections embedded in a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowData {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

/// A built-in workflow template
///
/// Templates are immutable: seeded once at process start, never persisted to
/// the mutable store, and returned verbatim to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Fixed template identifier (e.g., "template1")
    pub id: String,
    pub name: String,
    pub description: String,
    pub workflow_data: WorkflowData,
}
