//! Preview surface.
//!
//! The rendered document is served on its own URL under a CSP `sandbox`
//! policy without `allow-same-origin`, so the browser gives it an opaque
//! origin: no cookies, no storage and no script access to the page that
//! embeds it. Scripts and form submission are disabled outright.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::routes::session_error_to_response;
use crate::services::session;
use crate::state::AppState;

pub const PREVIEW_CSP: &str = "sandbox; default-src 'none'; style-src 'unsafe-inline'; img-src data: https:";

/// `GET /api/sessions/:id/preview`: last-good preview document.
pub async fn get_preview(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match session::read_session(&state, id, |s| s.preview.clone()).await {
        Ok(doc) => (
            [
                (CONTENT_TYPE, "text/html; charset=utf-8"),
                (CONTENT_SECURITY_POLICY, PREVIEW_CSP),
                (X_CONTENT_TYPE_OPTIONS, "nosniff"),
                (CACHE_CONTROL, "no-store"),
            ],
            doc,
        )
            .into_response(),
        Err(e) => session_error_to_response(e).into_response(),
    }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
