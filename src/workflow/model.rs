/// Relational persistence variant for workflow documents
///
/// SQLite-backed alternative to the file store with an identical logical
/// contract: documents are rows with the graph serialized into a JSON text
/// column. This backend is not wired into the HTTP surface; the handlers
/// serve from the file store. It exists as the drop-in relational option
/// a deployment can switch to without touching the document format.

use crate::error::StoreError;
use serde_json::{json, Map, Value};
use sqlx::{sqlite::SqlitePool, Row};

/// A workflow row from the `workflows` table
#[derive(Debug, Clone)]
pub struct WorkflowRecord {
    /// Store-assigned autoincrement id
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Serialized JSON of nodes and connections; NULL for empty documents
    pub workflow_data: Option<String>,
    pub is_template: bool,
    /// Set once at insert
    pub created_at: String,
    /// Refreshed on every update
    pub updated_at: String,
}

impl WorkflowRecord {
    /// Project the row into its API shape, deserializing `workflow_data`
    ///
    /// A NULL `workflow_data` yields an empty mapping rather than an error.
    pub fn to_json(&self) -> Result<Value, StoreError> {
        let workflow_data = match &self.workflow_data {
            Some(raw) => serde_json::from_str(raw)?,
            None => Value::Object(Map::new()),
        };

        Ok(json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "workflow_data": workflow_data,
            "is_template": self.is_template,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        }))
    }
}

/// Fields accepted when inserting or updating a workflow row
#[derive(Debug, Clone, Default)]
pub struct WorkflowRow {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workflow_data: Option<Value>,
    pub is_template: bool,
}

/// SQLite-based workflow storage
#[derive(Debug, Clone)]
pub struct WorkflowDatabase {
    pool: SqlitePool,
}

impl WorkflowDatabase {
    /// Create a storage instance over an existing connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the workflows schema
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workflows (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT 'Untitled Workflow',
                description TEXT,
                workflow_data TEXT,
                is_template BOOLEAN NOT NULL DEFAULT 0,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Index on name for list/lookup queries
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_workflows_name
            ON workflows(name)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new workflow row, returning its assigned id
    pub async fn insert(&self, row: WorkflowRow) -> Result<i64, StoreError> {
        let workflow_data = row
            .workflow_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let result = sqlx::query(
            r#"
            INSERT INTO workflows (name, description, workflow_data, is_template)
            VALUES (COALESCE(?, 'Untitled Workflow'), ?, ?, ?)
            "#,
        )
        .bind(&row.name)
        .bind(&row.description)
        .bind(&workflow_data)
        .bind(row.is_template)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Update an existing row in place, refreshing `updated_at`
    ///
    /// Returns false when no row has the given id.
    pub async fn update(&self, id: i64, row: WorkflowRow) -> Result<bool, StoreError> {
        let workflow_data = row
            .workflow_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let result = sqlx::query(
            r#"
            UPDATE workflows SET
                name = COALESCE(?, name),
                description = ?,
                workflow_data = ?,
                is_template = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&row.name)
        .bind(&row.description)
        .bind(&workflow_data)
        .bind(row.is_template)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Retrieve a workflow row by id
    pub async fn get(&self, id: i64) -> Result<Option<WorkflowRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, description, workflow_data, is_template, created_at, updated_at \
             FROM workflows WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| WorkflowRecord {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            workflow_data: row.get("workflow_data"),
            is_template: row.get("is_template"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    /// List all workflow rows, most recently updated first
    pub async fn list(&self) -> Result<Vec<WorkflowRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, description, workflow_data, is_template, created_at, updated_at \
             FROM workflows ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::new();
        for row in rows {
            records.push(WorkflowRecord {
                id: row.get("id"),
                name: row.get("name"),
                description: row.get("description"),
                workflow_data: row.get("workflow_data"),
                is_template: row.get("is_template"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            });
        }

        Ok(records)
    }

    /// Delete a workflow row by id
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM workflows WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn database() -> WorkflowDatabase {
        // Single connection so the in-memory database is shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let db = WorkflowDatabase::new(pool);
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let db = database().await;
        db.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn insert_and_get_round_trip() {
        let db = database().await;
        let graph = json!({
            "nodes": [{"id": "n1", "type": "webhook", "position": {"x": 0.0, "y": 0.0}, "properties": {}}],
            "connections": []
        });

        let id = db
            .insert(WorkflowRow {
                name: Some("Pipeline".to_string()),
                description: Some("nightly import".to_string()),
                workflow_data: Some(graph.clone()),
                is_template: false,
            })
            .await
            .unwrap();

        let record = db.get(id).await.unwrap().unwrap();
        assert_eq!(record.name, "Pipeline");
        assert!(!record.is_template);

        let projected = record.to_json().unwrap();
        assert_eq!(projected["workflow_data"], graph);
        assert_eq!(projected["description"], "nightly import");
    }

    #[tokio::test]
    async fn name_defaults_when_absent() {
        let db = database().await;
        let id = db.insert(WorkflowRow::default()).await.unwrap();
        let record = db.get(id).await.unwrap().unwrap();
        assert_eq!(record.name, "Untitled Workflow");
    }

    #[tokio::test]
    async fn null_workflow_data_projects_to_empty_mapping() {
        let db = database().await;
        let id = db.insert(WorkflowRow::default()).await.unwrap();
        let record = db.get(id).await.unwrap().unwrap();
        assert!(record.workflow_data.is_none());
        assert_eq!(record.to_json().unwrap()["workflow_data"], json!({}));
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() {
        let db = database().await;
        let id = db
            .insert(WorkflowRow {
                name: Some("v1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = db
            .update(
                id,
                WorkflowRow {
                    name: Some("v2".to_string()),
                    workflow_data: Some(json!({"nodes": [], "connections": []})),
                    is_template: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated);

        let record = db.get(id).await.unwrap().unwrap();
        assert_eq!(record.name, "v2");
        assert!(record.is_template);
        assert!(record.workflow_data.is_some());
    }

    #[tokio::test]
    async fn update_unknown_id_reports_false() {
        let db = database().await;
        assert!(!db.update(999, WorkflowRow::default()).await.unwrap());
    }

    #[tokio::test]
    async fn list_and_delete() {
        let db = database().await;
        let a = db.insert(WorkflowRow { name: Some("a".into()), ..Default::default() }).await.unwrap();
        db.insert(WorkflowRow { name: Some("b".into()), ..Default::default() }).await.unwrap();

        assert_eq!(db.list().await.unwrap().len(), 2);

        assert!(db.delete(a).await.unwrap());
        assert!(!db.delete(a).await.unwrap());
        assert_eq!(db.list().await.unwrap().len(), 1);
    }
}
