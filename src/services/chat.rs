//! Chat service: user utterances in, simulated assistant turns out.
//!
//! DESIGN
//! ======
//! The user's message is appended to the transcript immediately; the reply
//! is produced by a per-session worker that pulls utterances off a bounded
//! queue one at a time. Sequential processing is what keeps replies in the
//! order their prompts were sent.
//!
//! For each utterance the worker waits out the "thinking" delay, appends the
//! responder's reply, and if the responder picked a snippet, waits the code
//! delay and installs it: editor contents replaced, pending auto-render
//! cancelled, preview re-rendered, all under one write lock.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::services::preview;
use crate::services::responder;
use crate::services::session::{SessionError, with_session};
use crate::snippets::SnippetId;
use crate::state::{AppState, Sender};

/// Accept a user utterance. Blank input is ignored and returns `false`.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] for an unknown session, or
/// [`SessionError::ChatClosed`] if its worker has stopped.
pub async fn send_message(state: &AppState, id: Uuid, utterance: &str) -> Result<bool, SessionError> {
    let message = utterance.trim();
    if message.is_empty() {
        return Ok(false);
    }

    let chat_tx = with_session(state, id, |session| {
        session.state.append_chat_message(message, Sender::User);
        session.chat_tx.clone()
    })
    .await?;

    chat_tx
        .send(message.to_owned())
        .await
        .map_err(|_| SessionError::ChatClosed(id))?;
    debug!(session_id = %id, len = message.len(), "utterance queued");
    Ok(true)
}

/// Spawn the reply worker for one session. It exits when the session's
/// queue sender is dropped.
pub fn spawn_chat_worker(state: AppState, id: Uuid, mut rx: mpsc::Receiver<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(utterance) = rx.recv().await {
            tokio::time::sleep(state.config.think_delay).await;

            let reply = responder::respond(&utterance);
            let delivered = with_session(&state, id, |session| {
                session.state.append_chat_message(reply.text, Sender::Ai);
            })
            .await;
            if delivered.is_err() {
                break;
            }

            if let Some(snippet) = reply.code {
                tokio::time::sleep(state.config.code_delay).await;
                if install_snippet(&state, id, snippet).await.is_err() {
                    break;
                }
            }
        }
        debug!(session_id = %id, "chat worker stopped");
    })
}

/// Replace the session's code with `snippet` and render it.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn install_snippet(state: &AppState, id: Uuid, snippet: SnippetId) -> Result<(), SessionError> {
    let max_bytes = state.config.preview_max_bytes;
    with_session(state, id, |session| {
        session.render_debounce.cancel();
        session.state.install_snippet(snippet);
        preview::run_code(&mut session.state, max_bytes);
    })
    .await?;
    info!(session_id = %id, snippet = snippet.as_str(), "snippet installed");
    Ok(())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
