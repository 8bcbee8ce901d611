//! Synthesis Result
//!
//! Result types for synthesis runs.

use std::path::PathBuf;

use crate::domain::entities::{LogEntry, LogLevel, RunOutcome};
use crate::domain::value_objects::{MachineDirectory, Phase};

/// Result of a synthesis run
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// `<dest>/DOE_<date>`
    pub doe_root: PathBuf,
    /// Last phase reached (`Complete` or `Failed`)
    pub phase: Phase,
    /// Machines found in the source folder, in processing order
    pub machines: Vec<MachineDirectory>,
    /// Ordered run log
    pub entries: Vec<LogEntry>,
    /// Counts derived from the log
    pub outcome: RunOutcome,
}

impl SynthesisResult {
    /// The run log as newline-joined text
    pub fn log_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when the run reached `Complete`
    pub fn is_success(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn is_clean(&self) -> bool {
        self.is_success() && self.outcome.is_clean()
    }

    /// Entries of a given level, in log order
    pub fn entries_at(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level == level)
    }
}
