//! Responder: keyword lookup standing in for an assistant.
//!
//! DESIGN
//! ======
//! Two independent lookups over fixed, ordered tables. The reply table is
//! scanned first-match-wins against the lower-cased utterance; when nothing
//! matches, one of five fallback replies is drawn at random. The code table is
//! consulted only when the utterance asks to "create" or "build" something,
//! and falls back to the default snippet.
//!
//! Both lookups are pure. Latency and delivery order belong to the chat
//! worker, not here.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::snippets::SnippetId;

// =============================================================================
// TABLES
// =============================================================================

pub const REPLY_RULES: &[(&str, &str)] = &[
    (
        "navigation",
        "I'll create a responsive navigation bar with smooth animations and mobile-friendly design.",
    ),
    ("form", "I'll build a form with proper validation and user-friendly error handling."),
    ("animation", "I'll design smooth CSS animations with proper timing and easing functions."),
    ("chart", "I'll create an interactive chart with hover effects and responsive design."),
    ("api", "I'll implement proper API handling with loading states and error management."),
    ("layout", "I'll design a responsive layout that works beautifully on all devices."),
];

pub const FALLBACK_REPLIES: [&str; 5] = [
    "I'll help you create that component! Let me generate the code with proper annotations so you can understand each part.",
    "Great idea! I'll build that for you with modern best practices and include explanatory comments.",
    "Perfect! I'll create an optimized solution with clear documentation for each function.",
    "Excellent choice! Let me craft that with responsive design and accessibility features.",
    "I'll generate clean, maintainable code with detailed annotations for learning purposes.",
];

pub const CODE_RULES: &[(&str, SnippetId)] = &[
    ("navigation", SnippetId::Navigation),
    ("form", SnippetId::Form),
    ("animation", SnippetId::Animation),
];

const CREATION_KEYWORDS: [&str; 2] = ["create", "build"];

// =============================================================================
// LOOKUP
// =============================================================================

/// One responder turn: the reply text plus the snippet to install, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub code: Option<SnippetId>,
}

/// Answer an utterance using the thread-local RNG for fallback replies.
#[must_use]
pub fn respond(utterance: &str) -> Reply {
    respond_with(utterance, &mut rand::rng())
}

#[must_use]
pub fn respond_with<R: Rng + ?Sized>(utterance: &str, rng: &mut R) -> Reply {
    Reply { text: select_reply_with(utterance, rng).to_owned(), code: select_code(utterance) }
}

/// Reply for the first matching keyword, else a random fallback.
pub fn select_reply_with<R: Rng + ?Sized>(utterance: &str, rng: &mut R) -> &'static str {
    let lowered = utterance.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, reply)| *reply)
        .or_else(|| FALLBACK_REPLIES.choose(rng).copied())
        .unwrap_or(FALLBACK_REPLIES[0])
}

#[must_use]
pub fn has_creation_intent(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    CREATION_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Snippet to install for this utterance. `None` without creation intent.
#[must_use]
pub fn select_code(utterance: &str) -> Option<SnippetId> {
    if !has_creation_intent(utterance) {
        return None;
    }
    let lowered = utterance.to_lowercase();
    let id = CODE_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(SnippetId::Default, |(_, id)| *id);
    Some(id)
}

#[cfg(test)]
#[path = "responder_test.rs"]
mod tests;
