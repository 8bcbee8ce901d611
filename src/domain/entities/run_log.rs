//! Run log entity
//!
//! One `RunLog` is created per synthesis run and handed by `&mut` to the
//! orchestrator and every classifier. It keeps the ordered, human-readable
//! entries and the structured counts derived from them.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::ports::synthesis_events::{NoopEventSink, SynthesisEvent, SynthesisEventSink};

/// Severity / kind of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Copied,
    Skipped,
    Warning,
    Error,
}

impl LogLevel {
    /// Marker prefixed to the entry in the text log
    pub fn marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "●",
            LogLevel::Copied => "✓",
            LogLevel::Skipped => "○",
            LogLevel::Warning => "⚠",
            LogLevel::Error => "✗",
        }
    }

    /// ASCII marker for terminals without unicode
    pub fn ascii_marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "[..]",
            LogLevel::Copied => "[OK]",
            LogLevel::Skipped => "[ ]",
            LogLevel::Warning => "[WARN]",
            LogLevel::Error => "[FAIL]",
        }
    }
}

/// A single entry of the run log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.marker(), self.message)
    }
}

/// Structured counts surfaced next to the text log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub copied: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub errors: usize,
    pub folders_created: usize,
}

impl RunOutcome {
    pub fn is_clean(&self) -> bool {
        self.warnings == 0 && self.errors == 0
    }
}

/// Append-only log for one run
pub struct RunLog {
    entries: Vec<LogEntry>,
    outcome: RunOutcome,
    sink: Arc<dyn SynthesisEventSink>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopEventSink))
    }

    /// Create a log that forwards every appended entry to `sink`
    pub fn with_sink(sink: Arc<dyn SynthesisEventSink>) -> Self {
        Self {
            entries: Vec::new(),
            outcome: RunOutcome::default(),
            sink,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        match level {
            LogLevel::Info => {}
            LogLevel::Copied => self.outcome.copied += 1,
            LogLevel::Skipped => self.outcome.skipped += 1,
            LogLevel::Warning => self.outcome.warnings += 1,
            LogLevel::Error => self.outcome.errors += 1,
        }
        let entry = LogEntry {
            level,
            message: message.into(),
        };
        if self.sink.wants_detailed_events() {
            self.sink.on_event(SynthesisEvent::Logged(entry.clone()));
        }
        self.entries.push(entry);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message);
    }

    pub fn copied(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Copied, message);
    }

    pub fn skipped(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Skipped, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Error, message);
    }

    /// Record a folder the run had to create
    pub fn folder_created(&mut self, message: impl Into<String>) {
        self.outcome.folders_created += 1;
        self.push(LogLevel::Info, message);
    }

    /// Emit a non-log event through the same sink
    pub fn emit(&self, event: SynthesisEvent) {
        self.sink.on_event(event);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-joined text rendering
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_parts(self) -> (Vec<LogEntry>, RunOutcome) {
        (self.entries, self.outcome)
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RunLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLog")
            .field("entries", &self.entries)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
