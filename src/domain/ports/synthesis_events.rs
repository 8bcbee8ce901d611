//! Synthesis Event Port
//!
//! Provides an observable interface for DOE synthesis runs.
//! Enables live progress reporting and JSON event streams.

use std::path::PathBuf;

use crate::domain::entities::{LogEntry, RunOutcome};
use crate::domain::value_objects::Phase;

/// Event emitted during a synthesis run
#[derive(Debug, Clone)]
pub enum SynthesisEvent {
    /// Run started
    Started { source: PathBuf, doe_root: PathBuf },

    /// Orchestrator reached a new phase
    PhaseEntered { phase: Phase },

    /// An entry was appended to the run log
    Logged(LogEntry),

    /// Run finished (normally or aborted)
    Finished { phase: Phase, outcome: RunOutcome },
}

/// Trait for receiving synthesis events
///
/// Implementations:
/// - ConsoleEventSink: live lines in the terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: silent operation
pub trait SynthesisEventSink: Send + Sync {
    /// Handle a synthesis event
    fn on_event(&self, event: SynthesisEvent);

    /// Check if this sink wants per-entry events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SynthesisEventSink for NoopEventSink {
    fn on_event(&self, _event: SynthesisEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
