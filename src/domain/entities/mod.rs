//! Domain entities

pub mod run_log;

pub use run_log::{LogEntry, LogLevel, RunLog, RunOutcome};
