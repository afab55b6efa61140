/// File-backed persistence for workflow documents
///
/// Saved workflows land as one indented JSON file each under the configured
/// workflows directory, keyed by sanitized name. The store also holds the
/// in-memory by-id document map consulted by the load path and the seeded
/// template registry.
///
/// Known key inconsistency, preserved deliberately: `save` keys files by
/// sanitized *name* and never touches the in-memory map, while `load`
/// resolves by *id* against the map and the template registry. Ordinary
/// saved documents are therefore not reachable through `load`. See
/// DESIGN.md before changing either path.

use crate::error::StoreError;
use crate::workflow::sanitize::{sanitize, sanitize_or_fallback};
use crate::workflow::templates::builtin_templates;
use crate::workflow::types::{SaveWorkflowRequest, Template, WorkflowDocument};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Result of a successful save
#[derive(Debug, Clone, serde::Serialize)]
pub struct SavedWorkflow {
    /// Derived filename including the .json extension
    pub filename: String,
    /// Full path of the written file
    pub file_path: String,
}

/// Workflow document store backed by a directory of JSON files
///
/// Constructed once at process start and shared via the application state;
/// tests construct isolated instances over temporary directories.
#[derive(Debug)]
pub struct WorkflowStore {
    /// Directory receiving saved documents, created lazily on first save
    workflows_dir: PathBuf,
    /// Mutable by-id document map consulted by the load path
    documents: RwLock<HashMap<String, Value>>,
    /// Immutable template registry, seeded at construction
    templates: Vec<Template>,
}

impl WorkflowStore {
    /// Create a store over the given directory with the built-in templates
    pub fn new(workflows_dir: impl Into<PathBuf>) -> Self {
        Self {
            workflows_dir: workflows_dir.into(),
            documents: RwLock::new(HashMap::new()),
            templates: builtin_templates(),
        }
    }

    /// Persist a workflow document, overwriting any file of the same derived name
    ///
    /// Ensures the workflows directory exists, derives the filename from the
    /// sanitized document name (with a timestamped fallback), and writes the
    /// document as 2-space-indented JSON. Re-saving under a name that
    /// sanitizes identically replaces the previous file; there is no
    /// versioning.
    pub async fn save(&self, request: SaveWorkflowRequest) -> Result<SavedWorkflow, StoreError> {
        std::fs::create_dir_all(&self.workflows_dir)?;

        let document_count = self.documents.read().await.len();
        let name = request
            .name
            .unwrap_or_else(|| format!("Workflow {}", document_count + 1));

        let safe_filename = sanitize_or_fallback(&name, Utc::now());
        let file_path = self.workflows_dir.join(format!("{safe_filename}.json"));

        let document = WorkflowDocument {
            name,
            nodes: request.nodes,
            connections: request.connections,
            meta: request.meta,
            saved_at: Utc::now(),
            file_path: file_path.display().to_string(),
        };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&file_path, json)?;

        tracing::info!("Saved workflow document: {}", file_path.display());

        Ok(SavedWorkflow {
            filename: format!("{safe_filename}.json"),
            file_path: file_path.display().to_string(),
        })
    }

    /// Resolve a workflow by id: document map first, then the template registry
    pub async fn load(&self, id: &str) -> Result<Value, StoreError> {
        if let Some(document) = self.documents.read().await.get(id) {
            return Ok(document.clone());
        }

        if let Some(template) = self.templates.iter().find(|t| t.id == id) {
            return Ok(serde_json::to_value(template)?);
        }

        Err(StoreError::NotFound)
    }

    /// All seeded templates, in registry insertion order
    pub fn list_templates(&self) -> Vec<Template> {
        self.templates.clone()
    }

    /// Delete a saved workflow file by (unsanitized) name
    ///
    /// Returns the deleted filename. Fails with `InvalidName` when the name
    /// sanitizes to nothing and `FileNotFound` when no file with the derived
    /// name exists, so a second delete of the same name reports not-found.
    pub fn delete(&self, name: &str) -> Result<String, StoreError> {
        let safe_filename = sanitize(name);
        if safe_filename.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let file_path = self.workflows_dir.join(format!("{safe_filename}.json"));
        if !file_path.exists() {
            return Err(StoreError::FileNotFound);
        }

        std::fs::remove_file(&file_path)?;
        tracing::info!("Deleted workflow document: {}", file_path.display());

        Ok(format!("{safe_filename}.json"))
    }

    /// Number of documents in the in-memory map
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::types::{Connection, Node, Position};
    use serde_json::json;

    fn store() -> (tempfile::TempDir, WorkflowStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = WorkflowStore::new(dir.path().join("workflows"));
        (dir, store)
    }

    fn sample_request(name: &str) -> SaveWorkflowRequest {
        SaveWorkflowRequest {
            name: Some(name.to_string()),
            nodes: vec![Node {
                id: "n1".to_string(),
                node_type: "http_request".to_string(),
                position: Position { x: 100.0, y: 100.0 },
                properties: [("method".to_string(), json!("GET"))].into_iter().collect(),
            }],
            connections: vec![Connection {
                id: "c1".to_string(),
                from: "n1".to_string(),
                to: "n2-missing".to_string(),
            }],
            meta: Default::default(),
        }
    }

    #[tokio::test]
    async fn save_writes_document_that_round_trips() {
        let (_dir, store) = store();
        let saved = store.save(sample_request("Test")).await.unwrap();
        assert_eq!(saved.filename, "Test.json");

        let raw = std::fs::read_to_string(&saved.file_path).unwrap();
        let document: WorkflowDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.name, "Test");
        assert_eq!(document.nodes.len(), 1);
        assert_eq!(document.nodes[0].id, "n1");
        assert_eq!(document.nodes[0].node_type, "http_request");
        // Dangling connection endpoint is persisted verbatim.
        assert_eq!(document.connections[0].to, "n2-missing");
        assert_eq!(document.file_path, saved.file_path);
    }

    #[tokio::test]
    async fn save_is_overwrite_in_place() {
        let (_dir, store) = store();
        let first = store.save(sample_request("Same Name")).await.unwrap();
        let mut second_request = sample_request("Same Name");
        second_request.nodes.clear();
        let second = store.save(second_request).await.unwrap();

        assert_eq!(first.file_path, second.file_path);
        let raw = std::fs::read_to_string(&second.file_path).unwrap();
        let document: WorkflowDocument = serde_json::from_str(&raw).unwrap();
        assert!(document.nodes.is_empty());
    }

    #[tokio::test]
    async fn unnamed_save_gets_sequence_name() {
        let (_dir, store) = store();
        let saved = store.save(SaveWorkflowRequest::default()).await.unwrap();
        // The in-memory map is never populated, so the sequence starts at 1.
        assert_eq!(saved.filename, "Workflow_1.json");
    }

    #[tokio::test]
    async fn unsafe_name_falls_back_to_timestamp() {
        let (_dir, store) = store();
        let saved = store
            .save(SaveWorkflowRequest {
                name: Some("####".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(saved.filename.starts_with("Workflow_"));
        assert!(saved.filename.ends_with(".json"));
        let stem = saved.filename.trim_end_matches(".json");
        // Workflow_YYYYMMDD_HHMMSS
        assert_eq!(stem.len(), "Workflow_20240101_000000".len());
    }

    #[tokio::test]
    async fn saved_documents_are_not_loadable_by_name() {
        // The save path keys files by sanitized name; the load path resolves
        // by id against a map that saving never fills. Pinned on purpose.
        let (_dir, store) = store();
        store.save(sample_request("Test")).await.unwrap();
        assert!(matches!(store.load("Test").await, Err(StoreError::NotFound)));
        assert_eq!(store.document_count().await, 0);
    }

    #[tokio::test]
    async fn load_resolves_templates_by_id() {
        let (_dir, store) = store();
        let template = store.load("template1").await.unwrap();
        assert_eq!(template["name"], "Simple API Workflow");
        assert_eq!(template["workflow_data"]["nodes"][0]["type"], "http_request");
    }

    #[tokio::test]
    async fn template_load_is_stable_across_unrelated_traffic() {
        let (_dir, store) = store();
        let before = store.load("template1").await.unwrap();

        store.save(sample_request("Noise")).await.unwrap();
        store.delete("Noise").unwrap();

        let after = store.load("template1").await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn load_unknown_id_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(store.load("nope").await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn delete_then_delete_again_reports_not_found() {
        let (_dir, store) = store();
        store.save(sample_request("Doomed")).await.unwrap();

        let deleted = store.delete("Doomed").unwrap();
        assert_eq!(deleted, "Doomed.json");
        assert!(matches!(store.delete("Doomed"), Err(StoreError::FileNotFound)));
    }

    #[tokio::test]
    async fn delete_rejects_names_that_sanitize_to_nothing() {
        let (_dir, store) = store();
        assert!(matches!(store.delete("!!!"), Err(StoreError::InvalidName)));
        assert!(matches!(store.delete(""), Err(StoreError::InvalidName)));
    }

    #[test]
    fn list_templates_returns_seeded_set() {
        let store = WorkflowStore::new("unused");
        let templates = store.list_templates();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].id, "template1");
    }
}
