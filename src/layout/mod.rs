/// Per-session UI layout persistence
///
/// Holds panel and canvas state keyed by an opaque session id so the builder
/// restores pan/zoom and panel geometry across page reloads. Layout state is
/// created lazily on first save per session and is never deleted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Stored layout state for one session
///
/// Unset fields are omitted from serialized output, so a session that only
/// ever saved panel state serializes as `{"panel_state": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Panel positions and sizes, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_state: Option<Value>,
    /// Canvas zoom and pan, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_state: Option<Value>,
}

/// Partial update body for `POST /api/layout/save`
///
/// Only the fields present overwrite stored state; the other field is left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutUpdate {
    pub panel_state: Option<Value>,
    pub canvas_state: Option<Value>,
}

/// In-memory layout store keyed by session id
#[derive(Debug, Default)]
pub struct LayoutStore {
    sessions: RwLock<HashMap<String, LayoutState>>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial update, creating the session record if absent
    pub async fn save(&self, session_id: &str, update: LayoutUpdate) {
        let mut sessions = self.sessions.write().await;
        let state = sessions.entry(session_id.to_string()).or_default();

        if let Some(panel_state) = update.panel_state {
            state.panel_state = Some(panel_state);
        }
        if let Some(canvas_state) = update.canvas_state {
            state.canvas_state = Some(canvas_state);
        }
    }

    /// Stored state for the session, or empty state for an unknown session
    pub async fn load(&self, session_id: &str) -> LayoutState {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }
}
