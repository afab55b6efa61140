/// Layout persistence endpoints
///
/// Saves and restores per-session panel and canvas state. Session identity
/// rides in a signed cookie: minted lazily on the first layout save, never
/// minted on load-only access (a load before any save yields empty state).

use crate::api::workflows::AppState;
use crate::layout::LayoutUpdate;
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde_json::{json, Value};
use uuid::Uuid;

/// Cookie carrying the opaque session identifier
const SESSION_COOKIE: &str = "session_id";

/// Create layout persistence routes
pub fn create_layout_routes() -> Router<AppState> {
    Router::new()
        .route("/api/layout/save", post(save_layout))
        .route("/api/layout/load", get(load_layout))
}

/// Apply a partial layout update for the caller's session
///
/// POST /api/layout/save
/// Body: { "panel_state"?: {...}, "canvas_state"?: {...} }
/// Establishes the session cookie if the caller has none yet.
async fn save_layout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(update): Json<LayoutUpdate>,
) -> (SignedCookieJar, Json<Value>) {
    let (jar, session_id) = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let session_id = cookie.value().to_string();
            (jar, session_id)
        }
        None => {
            let session_id = Uuid::new_v4().to_string();
            tracing::debug!("Minting layout session: {}", session_id);
            let cookie = Cookie::build((SESSION_COOKIE, session_id.clone()))
                .path("/")
                .http_only(true)
                .build();
            (jar.add(cookie), session_id)
        }
    };

    state.layouts.save(&session_id, update).await;

    (
        jar,
        Json(json!({
            "status": "success",
            "message": "Layout saved successfully",
        })),
    )
}

/// Return the caller's stored layout state
///
/// GET /api/layout/load
/// A caller without a session cookie gets empty data; no session is minted
/// on the load path.
async fn load_layout(State(state): State<AppState>, jar: SignedCookieJar) -> Json<Value> {
    let data = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let layout = state.layouts.load(cookie.value()).await;
            serde_json::to_value(layout).unwrap_or_else(|_| json!({}))
        }
        None => json!({}),
    };

    Json(json!({
        "status": "success",
        "data": data,
    }))
}
