//! Preview renderer: sanitize, wrap, hand to the sandboxed surface.
//!
//! DESIGN
//! ======
//! Editor source is a single blob of markup, style and script. It is run
//! through an `ammonia` allowlist (structural, text and form tags plus
//! `<style>`; `class`/`id` attributes; http/https/mailto links), so script
//! elements, event handler attributes and unsafe URLs never reach the
//! preview. The result is wrapped in a fixed document shell.
//!
//! The preview route serves that document under a CSP `sandbox` policy,
//! which puts it in an opaque origin with no access to the host page's
//! storage, cookies or DOM.
//!
//! ERROR HANDLING
//! ==============
//! Every render attempt on a session writes exactly one console entry
//! (success or error). On error the session keeps its last-good preview.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::state::SessionState;

pub const PLACEHOLDER: &str = r#"<p style="padding: 20px; color: #666;">Write some code to see the preview</p>"#;

pub const SUCCESS_MESSAGE: &str = "Code executed successfully";
pub const REFRESHED_MESSAGE: &str = "Preview refreshed";

const ALLOWED_EXTRA_TAGS: &[&str] = &[
    "style", "main", "section", "form", "fieldset", "legend", "label", "input", "textarea", "button", "select",
    "option",
];

const ALLOWED_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("preview source is {len} bytes (max {max})")]
    TooLarge { len: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// Nothing to render; the surface shows [`PLACEHOLDER`].
    Placeholder,
    /// Sanitized source wrapped in a standalone document.
    Document(String),
}

impl RenderResult {
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Document(doc) => doc,
        }
    }
}

/// Render editor source into a preview document.
///
/// # Errors
///
/// Returns [`RenderError::TooLarge`] if `code` exceeds `max_bytes`.
pub fn render(code: &str, max_bytes: usize) -> Result<RenderResult, RenderError> {
    if code.trim().is_empty() {
        return Ok(RenderResult::Placeholder);
    }
    if code.len() > max_bytes {
        return Err(RenderError::TooLarge { len: code.len(), max: max_bytes });
    }
    Ok(RenderResult::Document(wrap_document(&sanitize(code))))
}

/// Strip everything outside the preview allowlist.
#[must_use]
pub fn sanitize(code: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .rm_clean_content_tags(&["style"])
        .add_tags(ALLOWED_EXTRA_TAGS)
        .add_generic_attributes(&["class", "id"])
        .add_tag_attributes("input", &["type", "name", "placeholder", "value", "required"])
        .add_tag_attributes("textarea", &["name", "rows", "cols", "placeholder", "required"])
        .add_tag_attributes("label", &["for"])
        .add_tag_attributes("button", &["type"])
        .add_tag_attributes("select", &["name"])
        .add_tag_attributes("option", &["value"])
        .url_schemes(HashSet::from(ALLOWED_URL_SCHEMES))
        .strip_comments(true);
    builder.clean(code).to_string()
}

fn wrap_document(safe_code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
body {{ margin: 0; padding: 20px; font-family: Arial, sans-serif; }}
</style>
</head>
<body>
{safe_code}
</body>
</html>
"#
    )
}

// =============================================================================
// SESSION OPERATIONS
// =============================================================================

/// Render the session's current code into its preview, logging the outcome.
pub fn run_code(session: &mut SessionState, max_bytes: usize) {
    match render(&session.current_code, max_bytes) {
        Ok(RenderResult::Placeholder) => {
            session.preview = PLACEHOLDER.to_owned();
        }
        Ok(RenderResult::Document(doc)) => {
            debug!(doc_len = doc.len(), "preview rendered");
            session.preview = doc;
            session.console.success(SUCCESS_MESSAGE);
        }
        Err(e) => {
            warn!(error = %e, "preview render failed");
            session.console.error(format!("Error: {e}"));
        }
    }
}

/// Re-run the current code and note the refresh in the console.
pub fn refresh_preview(session: &mut SessionState, max_bytes: usize) {
    run_code(session, max_bytes);
    session.console.info(REFRESHED_MESSAGE);
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
