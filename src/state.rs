//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the configuration and a map of live sessions. Each `Session` pairs a
//! plain `SessionState` value (everything a UI session can see or mutate)
//! with the runtime handles that drive it: the chat worker's queue and the
//! debounced auto-render slot, plus the last-access time used to evict
//! sessions nobody has touched for the configured idle period.
//!
//! `SessionState` itself has no async or locking concerns, so the responder,
//! renderer and prompt filter can be exercised on a bare value.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::Config;
use crate::console::{ConsoleLog, now_ms};
use crate::services::debounce::Debouncer;
use crate::snippets::SnippetId;

// =============================================================================
// CHAT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

// =============================================================================
// EDITOR
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Html,
    Css,
    Javascript,
}

// =============================================================================
// PROMPT LIBRARY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub template: String,
}

/// User-supplied fields for a prompt being saved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPrompt {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Please fill in all fields ({0} is empty)")]
    MissingField(&'static str),
}

const DEFAULT_PROMPTS: [(&str, &str, &str, &str); 6] = [
    (
        "components",
        "Navigation Bar",
        "Create a responsive navigation component",
        "Create a responsive navigation bar with logo, menu items, and mobile hamburger menu",
    ),
    (
        "forms",
        "Contact Form",
        "Build a contact form with validation",
        "Create a contact form with name, email, message fields and client-side validation",
    ),
    (
        "animations",
        "Loading Animation",
        "Create smooth loading animations",
        "Design a loading spinner with smooth CSS animations and fade effects",
    ),
    (
        "visualization",
        "Chart Component",
        "Build data visualization charts",
        "Create an interactive bar chart using Canvas API with hover effects",
    ),
    (
        "api",
        "Data Fetching",
        "Implement API data fetching",
        "Create a function to fetch data from an API with error handling and loading states",
    ),
    (
        "layout",
        "Card Grid",
        "Design responsive card layouts",
        "Create a responsive grid of cards with hover effects and proper spacing",
    ),
];

/// The built-in prompt library every session starts with, ids 1 through 6.
#[must_use]
pub fn default_prompts() -> Vec<PromptEntry> {
    DEFAULT_PROMPTS
        .iter()
        .zip(1u64..)
        .map(|(&(category, name, description, template), id)| PromptEntry {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            template: template.into(),
        })
        .collect()
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Everything one UI session owns. Lives until the session is ended.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub language: Language,
    pub annotations_visible: bool,
    pub chat_history: Vec<ChatMessage>,
    pub current_code: String,
    pub saved_prompts: Vec<PromptEntry>,
    pub console: ConsoleLog,
    /// Last successfully rendered preview document.
    #[serde(skip)]
    pub preview: String,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: Language::default(),
            annotations_visible: false,
            chat_history: Vec::new(),
            current_code: String::new(),
            saved_prompts: default_prompts(),
            console: ConsoleLog::new(),
            preview: crate::services::preview::PLACEHOLDER.to_owned(),
        }
    }

    pub fn append_chat_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.chat_history.push(ChatMessage { text: text.into(), sender, ts: now_ms() });
    }

    pub fn set_current_code(&mut self, code: impl Into<String>) {
        self.current_code = code.into();
    }

    /// Replace the editor contents with a snippet. Snippets are markup, so the
    /// language selector resets to HTML.
    pub fn install_snippet(&mut self, snippet: SnippetId) {
        self.current_code = snippet.code().to_owned();
        self.language = Language::Html;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip annotation visibility and return the new value.
    pub fn toggle_annotations(&mut self) -> bool {
        self.annotations_visible = !self.annotations_visible;
        self.annotations_visible
    }

    /// Validate and append a prompt to the library.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingField`] if the trimmed name or description
    /// is empty. Nothing is stored in that case.
    pub fn add_saved_prompt(&mut self, prompt: NewPrompt) -> Result<&PromptEntry, PromptError> {
        let name = prompt.name.trim();
        let description = prompt.description.trim();
        if name.is_empty() {
            return Err(PromptError::MissingField("name"));
        }
        if description.is_empty() {
            return Err(PromptError::MissingField("description"));
        }

        let id = self.saved_prompts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.saved_prompts.push(PromptEntry {
            id,
            name: name.to_owned(),
            category: prompt.category,
            description: description.to_owned(),
            template: prompt.template,
        });
        Ok(&self.saved_prompts[self.saved_prompts.len() - 1])
    }

    /// Prompts whose name or description contains `search` (case-insensitive)
    /// and whose category equals `category`. Empty inputs match everything.
    #[must_use]
    pub fn filter_prompts(&self, search: &str, category: &str) -> Vec<&PromptEntry> {
        let search = search.to_lowercase();
        self.saved_prompts
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&search) || p.description.to_lowercase().contains(&search)
            })
            .filter(|p| category.is_empty() || p.category == category)
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LIVE SESSION
// =============================================================================

/// A session plus the tasks that act on it.
pub struct Session {
    pub state: SessionState,
    /// Queue feeding this session's chat worker. Dropping it stops the worker.
    pub chat_tx: mpsc::Sender<String>,
    /// Pending auto-render after an edit.
    pub render_debounce: Debouncer,
    /// Last access, in milliseconds on the `AppState` clock. Atomic so
    /// readers holding only the read lock can bump it.
    last_seen_ms: AtomicU64,
}

impl Session {
    #[must_use]
    pub fn new(state: SessionState, chat_tx: mpsc::Sender<String>, now_ms: u64) -> Self {
        Self { state, chat_tx, render_debounce: Debouncer::new(), last_seen_ms: AtomicU64::new(now_ms) }
    }

    /// Record an access at `now_ms`. Never moves the timestamp backwards.
    pub fn touch(&self, now_ms: u64) {
        self.last_seen_ms.fetch_max(now_ms, Ordering::Relaxed);
    }

    #[must_use]
    pub fn idle_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_seen_ms.load(Ordering::Relaxed))
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    started: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            started: Instant::now(),
        }
    }

    /// Milliseconds since this state was built. Follows Tokio's clock, so it
    /// advances with paused time in tests.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
