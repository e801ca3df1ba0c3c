//! Engine event log
//!
//! Buffered log of engine events (block created/moved/removed, persistence
//! warnings). The frontend drains it through the wasm boundary to feed its
//! debug console; native callers can drain it wherever they like.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One buffered log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Buffered engine event log.
///
/// Clones share the same buffer, so the store, the persistence collaborator,
/// and the wasm runtime can all hold a handle to one log.
#[derive(Clone, Default)]
pub struct Logger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger {
    /// Create a new logger with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the given level
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.into(),
        });
    }

    /// Log a debug message
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an error message
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Take all buffered entries, leaving the buffer empty
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Number of buffered entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drained_entries_preserve_order_and_level() {
        let logger = Logger::new();
        logger.info("first");
        logger.warn("second");

        let entries = logger.drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, LogLevel::Warn);
        assert!(logger.is_empty());
    }

    #[test]
    fn clones_share_one_buffer() {
        let logger = Logger::new();
        let handle = logger.clone();
        handle.error("from the clone");
        assert_eq!(logger.len(), 1);
    }
}
