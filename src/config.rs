//! Runtime configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every knob has a default so the server starts with no environment at all.
//! Parsing goes through a lookup closure so tests can feed a map instead of
//! mutating the process environment.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_THINK_DELAY_MS: u64 = 1000;
pub const DEFAULT_CODE_DELAY_MS: u64 = 1000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_PREVIEW_MAX_BYTES: usize = 256 * 1024;
pub const DEFAULT_CHAT_QUEUE_CAPACITY: usize = 64;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Simulated "thinking" latency before a reply is delivered.
    pub think_delay: Duration,
    /// Extra latency between a reply and the generated code landing in the editor.
    pub code_delay: Duration,
    /// Quiet period before an edit triggers a preview render.
    pub debounce: Duration,
    pub preview_max_bytes: usize,
    pub chat_queue_capacity: usize,
    /// Sessions untouched for this long are ended by the reaper.
    pub session_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            think_delay: Duration::from_millis(DEFAULT_THINK_DELAY_MS),
            code_delay: Duration::from_millis(DEFAULT_CODE_DELAY_MS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            preview_max_bytes: DEFAULT_PREVIEW_MAX_BYTES,
            chat_queue_capacity: DEFAULT_CHAT_QUEUE_CAPACITY,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

impl Config {
    /// Build config from the process environment.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `DAYDREAM_THINK_DELAY_MS`: reply latency (default 1000)
    /// - `DAYDREAM_CODE_DELAY_MS`: code latency after the reply (default 1000)
    /// - `DAYDREAM_DEBOUNCE_MS`: auto-render quiet period (default 1000)
    /// - `DAYDREAM_PREVIEW_MAX_BYTES`: largest renderable source (default 256 KiB)
    /// - `DAYDREAM_CHAT_QUEUE_CAPACITY`: pending utterances per session (default 64)
    /// - `DAYDREAM_SESSION_IDLE_SECS`: idle time before a session is ended (default 1800, min 1)
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let millis = |key: &str, default: u64| Duration::from_millis(parse_or(&lookup, key, default));

        Ok(Self {
            port,
            think_delay: millis("DAYDREAM_THINK_DELAY_MS", DEFAULT_THINK_DELAY_MS),
            code_delay: millis("DAYDREAM_CODE_DELAY_MS", DEFAULT_CODE_DELAY_MS),
            debounce: millis("DAYDREAM_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
            preview_max_bytes: parse_or(&lookup, "DAYDREAM_PREVIEW_MAX_BYTES", DEFAULT_PREVIEW_MAX_BYTES),
            chat_queue_capacity: parse_or(&lookup, "DAYDREAM_CHAT_QUEUE_CAPACITY", DEFAULT_CHAT_QUEUE_CAPACITY)
                .max(1),
            session_idle: Duration::from_secs(
                parse_or(&lookup, "DAYDREAM_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS).max(1),
            ),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse::<T>().unwrap_or_else(|_| {
        tracing::warn!(key, value = %raw, "ignoring unparsable config value");
        default
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
