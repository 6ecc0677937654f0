//! Session, chat, editor and console routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::console::ConsoleEntry;
use crate::routes::{ApiError, session_error_to_response};
use crate::services::annotate::{Annotation, annotate};
use crate::services::{chat, responder, session};
use crate::snippets::SnippetId;
use crate::state::{AppState, ChatMessage, Language, SessionState};

#[derive(Serialize)]
pub struct CreatedSession {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct ChatBody {
    pub message: String,
}

#[derive(Deserialize)]
pub struct CodeBody {
    pub code: String,
}

#[derive(Deserialize)]
pub struct LanguageBody {
    pub language: Language,
}

#[derive(Serialize)]
pub struct AnnotationsResponse {
    pub visible: bool,
    pub annotations: Vec<Annotation>,
}

#[derive(Serialize)]
pub struct RespondResponse {
    pub reply: String,
    pub snippet: Option<SnippetId>,
    pub code: Option<&'static str>,
}

/// `POST /api/respond`: one stateless responder turn.
pub async fn respond(Json(body): Json<ChatBody>) -> Json<RespondResponse> {
    let reply = responder::respond(&body.message);
    Json(RespondResponse { reply: reply.text, snippet: reply.code, code: reply.code.map(SnippetId::code) })
}

/// `POST /api/sessions`: start a session.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<CreatedSession>) {
    let id = session::create_session(&state).await;
    (StatusCode::CREATED, Json(CreatedSession { id }))
}

/// `GET /api/sessions/:id`: full session snapshot.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionState>, ApiError> {
    session::read_session(&state, id, SessionState::clone)
        .await
        .map(Json)
        .map_err(session_error_to_response)
}

/// `DELETE /api/sessions/:id`: end a session.
pub async fn delete_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    session::end_session(&state, id)
        .await
        .map_err(session_error_to_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/sessions/:id/chat`: send an utterance. Blank input is a no-op.
pub async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ChatBody>,
) -> Result<StatusCode, ApiError> {
    let queued = chat::send_message(&state, id, &body.message)
        .await
        .map_err(session_error_to_response)?;
    Ok(if queued { StatusCode::ACCEPTED } else { StatusCode::NO_CONTENT })
}

/// `GET /api/sessions/:id/chat`: transcript.
pub async fn list_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    session::read_session(&state, id, |s| s.chat_history.clone())
        .await
        .map(Json)
        .map_err(session_error_to_response)
}

/// `PUT /api/sessions/:id/code`: store an edit; the preview follows after
/// the debounce window.
pub async fn edit_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CodeBody>,
) -> Result<StatusCode, ApiError> {
    session::edit_code(&state, id, body.code)
        .await
        .map_err(session_error_to_response)?;
    Ok(StatusCode::ACCEPTED)
}

/// `POST /api/sessions/:id/run`: render now.
pub async fn run_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ConsoleEntry>>, ApiError> {
    session::run_code(&state, id)
        .await
        .map_err(session_error_to_response)?;
    console_entries(&state, id).await
}

/// `POST /api/sessions/:id/refresh`: re-render and log the refresh.
pub async fn refresh_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ConsoleEntry>>, ApiError> {
    session::refresh_preview(&state, id)
        .await
        .map_err(session_error_to_response)?;
    console_entries(&state, id).await
}

/// `GET /api/sessions/:id/console`
pub async fn get_console(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ConsoleEntry>>, ApiError> {
    console_entries(&state, id).await
}

/// `DELETE /api/sessions/:id/console`: reset to the "cleared" notice.
pub async fn clear_console(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ConsoleEntry>>, ApiError> {
    session::with_session(&state, id, |s| {
        s.state.console.clear();
        s.state.console.entries().to_vec()
    })
    .await
    .map(Json)
    .map_err(session_error_to_response)
}

async fn console_entries(state: &AppState, id: Uuid) -> Result<Json<Vec<ConsoleEntry>>, ApiError> {
    session::read_session(state, id, |s| s.console.entries().to_vec())
        .await
        .map(Json)
        .map_err(session_error_to_response)
}

/// `PUT /api/sessions/:id/language`
pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<LanguageBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    session::with_session(&state, id, |s| s.state.set_language(body.language))
        .await
        .map_err(session_error_to_response)?;
    Ok(Json(serde_json::json!({ "language": body.language })))
}

/// `POST /api/sessions/:id/annotations/toggle`
pub async fn toggle_annotations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnnotationsResponse>, ApiError> {
    session::with_session(&state, id, |s| {
        s.state.toggle_annotations();
        annotations_for(&s.state)
    })
    .await
    .map(Json)
    .map_err(session_error_to_response)
}

/// `GET /api/sessions/:id/annotations`: empty while annotations are hidden.
pub async fn get_annotations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnnotationsResponse>, ApiError> {
    session::read_session(&state, id, annotations_for)
        .await
        .map(Json)
        .map_err(session_error_to_response)
}

fn annotations_for(s: &SessionState) -> AnnotationsResponse {
    let annotations = if s.annotations_visible { annotate(&s.current_code) } else { Vec::new() };
    AnnotationsResponse { visible: s.annotations_visible, annotations }
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
