//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `responder`, `preview` and `annotate` are pure functions over their
//! inputs. `session` and `chat` own the stateful side: locking, timers and
//! the per-session reply worker. Route handlers only translate HTTP.

pub mod annotate;
pub mod chat;
pub mod debounce;
pub mod preview;
pub mod responder;
pub mod session;
