//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A JSON API over per-session state, plus one HTML endpoint that serves the
//! sanitized preview document inside a CSP sandbox.

pub mod preview;
pub mod prompts;
pub mod sessions;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::session::SessionError;
use crate::state::AppState;

/// Error body returned by API handlers: `{ "error": "..." }`.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn session_error_to_response(err: SessionError) -> ApiError {
    let status = match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::ChatClosed(_) => StatusCode::GONE,
        SessionError::Prompt(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/respond", post(sessions::respond))
        .route("/api/sessions", post(sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route(
            "/api/sessions/{id}/chat",
            get(sessions::list_chat).post(sessions::send_chat),
        )
        .route("/api/sessions/{id}/code", put(sessions::edit_code))
        .route("/api/sessions/{id}/run", post(sessions::run_code))
        .route("/api/sessions/{id}/refresh", post(sessions::refresh_preview))
        .route(
            "/api/sessions/{id}/console",
            get(sessions::get_console).delete(sessions::clear_console),
        )
        .route("/api/sessions/{id}/language", put(sessions::set_language))
        .route("/api/sessions/{id}/annotations", get(sessions::get_annotations))
        .route("/api/sessions/{id}/annotations/toggle", post(sessions::toggle_annotations))
        .route(
            "/api/sessions/{id}/prompts",
            get(prompts::list_prompts).post(prompts::save_prompt),
        )
        .route("/api/sessions/{id}/preview", get(preview::get_preview))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
