//! JSON Event Sink
//!
//! Outputs synthesis events as NDJSON for scripts and CI consumption.

use crate::domain::ports::{SynthesisEvent, SynthesisEventSink};
use crate::domain::value_objects::Phase;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SynthesisEventSink for JsonEventSink {
    fn on_event(&self, event: SynthesisEvent) {
        let json = match event {
            SynthesisEvent::Started { source, doe_root } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "source": source.display().to_string(),
                    "doe_root": doe_root.display().to_string(),
                })
            }

            SynthesisEvent::PhaseEntered { phase } => {
                serde_json::json!({
                    "event": "phase",
                    "command": "build",
                    "phase": phase,
                })
            }

            SynthesisEvent::Logged(entry) => {
                serde_json::json!({
                    "event": "entry",
                    "command": "build",
                    "level": entry.level,
                    "message": entry.message,
                })
            }

            SynthesisEvent::Finished { phase, outcome } => {
                let status = if phase == Phase::Failed {
                    "failed"
                } else if outcome.is_clean() {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "status": status,
                    "phase": phase,
                    "copied": outcome.copied,
                    "skipped": outcome.skipped,
                    "warnings": outcome.warnings,
                    "errors": outcome.errors,
                    "folders_created": outcome.folders_created,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants every log entry
    }
}
