//! Prompt library routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::{ApiError, session_error_to_response};
use crate::services::session::{self, SessionError};
use crate::state::{AppState, NewPrompt, PromptEntry};

#[derive(Debug, Default, Deserialize)]
pub struct PromptQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

/// `GET /api/sessions/:id/prompts?search=&category=`: filtered library.
pub async fn list_prompts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PromptQuery>,
) -> Result<Json<Vec<PromptEntry>>, ApiError> {
    session::read_session(&state, id, |s| {
        s.filter_prompts(&query.search, &query.category)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    })
    .await
    .map(Json)
    .map_err(session_error_to_response)
}

/// `POST /api/sessions/:id/prompts`: save a prompt. Blank name or
/// description is rejected with 422 and nothing is stored.
pub async fn save_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewPrompt>,
) -> Result<(StatusCode, Json<PromptEntry>), ApiError> {
    let entry = session::with_session(&state, id, |s| {
        s.state
            .add_saved_prompt(body)
            .cloned()
            .map_err(SessionError::from)
    })
    .await
    .and_then(|r| r)
    .map_err(session_error_to_response)?;

    tracing::info!(session_id = %id, prompt_id = entry.id, "prompt saved");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;
