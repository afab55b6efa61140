/// Workflow Document Layer
///
/// This module handles workflow graph documents, persistence, and the
/// built-in template registry. It provides:
/// - Type definitions (WorkflowDocument, Node, Connection, Template)
/// - Filename sanitization for user-supplied workflow names
/// - File-backed persistence (one JSON document per saved workflow)
/// - An alternate relational backend with the same logical contract

// Core workflow type definitions
pub mod types;

// Filename sanitizer for on-disk document names
pub mod sanitize;

// Built-in template registry, seeded at process start
pub mod templates;

// File-backed document store
pub mod store;

// Relational (SQLite) document store variant
pub mod model;

// Re-export commonly used types
pub use sanitize::{sanitize, sanitize_or_fallback};
pub use store::{SavedWorkflow, WorkflowStore};
pub use types::{Connection, Node, Position, SaveWorkflowRequest, Template, WorkflowDocument};
