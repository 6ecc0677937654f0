//! On-screen console log for a session.
//!
//! Append-only between clears. Clearing does not empty the log: it resets it
//! to a single "Console cleared..." info entry, the same thing a user sees in
//! the preview pane after pressing the clear button.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

pub const CLEARED_MESSAGE: &str = "Console cleared...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsoleEntry {
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConsoleLog {
    entries: Vec<ConsoleEntry>,
}

impl ConsoleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push(ConsoleEntry { ts: now_ms(), level, message: message.into() });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.info(CLEARED_MESSAGE);
    }

    #[must_use]
    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    #[must_use]
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }
}

pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
