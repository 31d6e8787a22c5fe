//! Append-only JSONL logger.
//!
//! One JSON object per line: `{timestamp, level, message, context}`. A
//! logging failure must never fail the command that triggered it, so write
//! errors are swallowed; the numeric projection is always the priority
//! output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message: &'a str,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    context: serde_json::Value,
}

/// File-backed JSONL logger; a `None` path disables logging entirely.
#[derive(Debug, Clone)]
pub struct JsonlLogger {
    path: Option<PathBuf>,
}

impl JsonlLogger {
    /// Logger appending to `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// No-op logger.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    /// Append one entry. Failures are swallowed.
    pub fn log(&self, level: LogLevel, message: &str, context: serde_json::Value) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message,
            context,
        };
        let Ok(line) = serde_json::to_string(&entry) else {
            return;
        };
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{line}");
        }
    }

    /// Append an info-level entry.
    pub fn info(&self, message: &str, context: serde_json::Value) {
        self.log(LogLevel::Info, message, context);
    }

    /// Append a warn-level entry.
    pub fn warn(&self, message: &str, context: serde_json::Value) {
        self.log(LogLevel::Warn, message, context);
    }

    /// Append an error-level entry.
    pub fn error(&self, message: &str, context: serde_json::Value) {
        self.log(LogLevel::Error, message, context);
    }
}
