/// Error taxonomy for store and handler failures
///
/// Every failure a request can hit maps onto one of these kinds, and the
/// single IntoResponse impl below is the only place HTTP status codes are
/// assigned. Handlers never build error responses by hand.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Failure kinds surfaced by the workflow, layout, and catalog stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unknown workflow or template id on the load path.
    #[error("Workflow not found")]
    NotFound,

    /// No saved file with the derived name on the delete path.
    #[error("Workflow file not found")]
    FileNotFound,

    /// The supplied workflow name sanitized down to an empty string.
    #[error("Invalid workflow name")]
    InvalidName,

    /// Directory creation, file write, or file removal failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Document or catalog JSON could not be serialized/deserialized.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Relational backend query failure.
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map the error kind to its HTTP status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound | StoreError::FileNotFound => StatusCode::NOT_FOUND,
            StoreError::InvalidName => StatusCode::BAD_REQUEST,
            StoreError::Io(_) | StoreError::Serialization(_) | StoreError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for StoreError {
    /// Uniform `{status: "error", message}` envelope for every failure class.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
