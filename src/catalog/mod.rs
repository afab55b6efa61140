/// Tool catalog for the node palette
///
/// The catalog enumerates the node types the canvas UI can place and the
/// editable property schema for each. It is loaded once from a JSON resource
/// at process start and is read-only afterwards. The property schemas are
/// advisory UI metadata: nothing in the backend validates node properties
/// against them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A single node type offered by the palette
///
/// `properties` maps property names to an opaque spec object (type, options,
/// default, placeholder, ...) consumed verbatim by the properties panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Stable tool identifier referenced by node `type` fields (e.g., "http_request")
    pub id: String,
    /// Display name shown in the palette
    pub name: String,
    /// Icon name for the palette entry
    pub icon: String,
    /// Palette grouping (e.g., "Web", "Data", "Control")
    pub category: String,
    /// One-line description shown as a tooltip
    pub description: String,
    /// Editable property schema, passed through to the UI untouched
    pub properties: Value,
}

/// Read-only tool catalog, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
}

impl ToolCatalog {
    /// Load the catalog from a JSON resource, degrading to empty on failure
    ///
    /// A missing or malformed resource must not prevent the process from
    /// starting; the UI simply offers zero tools. The failure is logged.
    pub fn load(path: &Path) -> Self {
        match Self::read_tools(path) {
            Ok(tools) => {
                tracing::info!("Loaded tool catalog with {} tools from {}", tools.len(), path.display());
                Self { tools }
            }
            Err(e) => {
                tracing::warn!("Failed to load tool catalog from {}: {} - starting with empty catalog", path.display(), e);
                Self { tools: Vec::new() }
            }
        }
    }

    /// Build a catalog from an already-materialized tool list
    pub fn from_tools(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    fn read_tools(path: &Path) -> anyhow::Result<Vec<ToolDefinition>> {
        let raw = std::fs::read_to_string(path)?;
        let tools = serde_json::from_str(&raw)?;
        Ok(tools)
    }

    /// All tool definitions in catalog order
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
