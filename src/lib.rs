/// Flowcanvas: visual workflow builder backend
///
/// This library provides the backend for a drag-and-drop workflow canvas:
/// a configurable node tool catalog, JSON document persistence for workflow
/// graphs, built-in templates, and per-session UI layout storage.

// Core configuration and setup
pub mod config;

// Error taxonomy shared by stores and handlers
pub mod error;

// Tool catalog - node types and their property schemas for the palette
pub mod catalog;

// Workflow document layer - types, sanitization, storage, and templates
pub mod workflow;

// Per-session UI layout persistence
pub mod layout;

// HTTP API layer - REST endpoints for documents, tools, and layout
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use catalog::{ToolCatalog, ToolDefinition};
pub use error::StoreError;
pub use layout::{LayoutState, LayoutStore};
pub use server::start_server;
pub use workflow::{Connection, Node, Template, WorkflowDocument, WorkflowStore};
