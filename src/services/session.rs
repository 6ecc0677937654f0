//! Session lifecycle and editor operations.
//!
//! DESIGN
//! ======
//! A session is created with its chat worker already running and dies when
//! it is removed from `AppState`: removal drops the worker's queue sender
//! (the worker drains and exits) and the debouncer (any pending render is
//! aborted).
//!
//! Sessions are unauthenticated, so abandoned ones are reclaimed: every
//! access through `with_session`/`read_session` stamps the session, and a
//! reaper task periodically ends sessions idle for longer than
//! `Config::session_idle`.
//!
//! All mutations go through `with_session`, which holds the sessions write
//! lock only for the synchronous closure. Installing code and rendering it
//! happen inside one closure, so no reader ever sees a half-installed snippet.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::services::{chat, preview};
use crate::state::{AppState, Session, SessionState};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
    #[error("chat worker for session {0} has stopped")]
    ChatClosed(Uuid),
    #[error(transparent)]
    Prompt(#[from] crate::state::PromptError),
}

/// Create a session, start its chat worker, and return its ID.
pub async fn create_session(state: &AppState) -> Uuid {
    let id = Uuid::new_v4();
    let (chat_tx, chat_rx) = mpsc::channel(state.config.chat_queue_capacity);

    let mut session_state = SessionState::new();
    session_state.console.success("DayDream AI initialized successfully");
    session_state.console.info("Ready to create amazing code!");

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(id, Session::new(session_state, chat_tx, state.clock_ms()));
    }

    let _worker = chat::spawn_chat_worker(state.clone(), id, chat_rx);
    info!(session_id = %id, "session created");
    id
}

/// Remove a session. Its worker exits once queued utterances drain.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn end_session(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    let removed = state.sessions.write().await.remove(&id);
    match removed {
        Some(_) => {
            info!(session_id = %id, "session ended");
            Ok(())
        }
        None => Err(SessionError::NotFound(id)),
    }
}

/// Run `f` against a session under the write lock.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn with_session<T, F>(state: &AppState, id: Uuid, f: F) -> Result<T, SessionError>
where
    F: FnOnce(&mut Session) -> T,
{
    let now = state.clock_ms();
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    session.touch(now);
    Ok(f(session))
}

/// Run `f` against a session's state under the read lock.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn read_session<T, F>(state: &AppState, id: Uuid, f: F) -> Result<T, SessionError>
where
    F: FnOnce(&SessionState) -> T,
{
    let now = state.clock_ms();
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
    session.touch(now);
    Ok(f(&session.state))
}

/// Store an edit and schedule a trailing-edge render of it.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn edit_code(state: &AppState, id: Uuid, code: String) -> Result<(), SessionError> {
    let delay = state.config.debounce;
    let task_state = state.clone();
    with_session(state, id, move |session| {
        debug!(session_id = %id, code_len = code.len(), "code edited");
        session.state.set_current_code(code);
        session.render_debounce.schedule(delay, async move {
            let max_bytes = task_state.config.preview_max_bytes;
            let rendered = with_session(&task_state, id, |session| {
                preview::run_code(&mut session.state, max_bytes);
            })
            .await;
            if let Err(e) = rendered {
                debug!(error = %e, "debounced render skipped");
            }
        });
    })
    .await
}

/// Render the current code now, superseding any pending auto-render.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn run_code(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    let max_bytes = state.config.preview_max_bytes;
    with_session(state, id, |session| {
        session.render_debounce.cancel();
        preview::run_code(&mut session.state, max_bytes);
    })
    .await
}

/// Re-render and note the refresh in the console.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if no such session exists.
pub async fn refresh_preview(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    let max_bytes = state.config.preview_max_bytes;
    with_session(state, id, |session| {
        session.render_debounce.cancel();
        preview::refresh_preview(&mut session.state, max_bytes);
    })
    .await
}

// =============================================================================
// IDLE EVICTION
// =============================================================================

/// End every session idle for at least `Config::session_idle`. Returns how
/// many were ended.
pub async fn reap_idle_sessions(state: &AppState) -> usize {
    let idle_ms = u64::try_from(state.config.session_idle.as_millis()).unwrap_or(u64::MAX);
    let now = state.clock_ms();

    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|id, session| {
        let idle_for = session.idle_ms(now);
        let keep = idle_for < idle_ms;
        if !keep {
            info!(session_id = %id, idle_ms = idle_for, "idle session ended");
        }
        keep
    });
    before - sessions.len()
}

/// Spawn the idle-session reaper. Returns a handle for shutdown.
pub fn spawn_session_reaper(state: AppState) -> JoinHandle<()> {
    let interval = reap_interval(state.config.session_idle);
    info!(
        session_idle = ?state.config.session_idle,
        reap_interval = ?interval,
        "idle session reaper configured"
    );
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let reaped = reap_idle_sessions(&state).await;
            if reaped > 0 {
                debug!(reaped, "reaper pass complete");
            }
        }
    })
}

/// Sweep a few times per idle period, at most once a minute.
fn reap_interval(idle: Duration) -> Duration {
    (idle / 4).clamp(Duration::from_secs(1), Duration::from_secs(60))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
