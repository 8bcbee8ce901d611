//! Event Sink Implementations
//!
//! Provides concrete implementations of SynthesisEventSink:
//! - ConsoleEventSink: human-readable progress lines
//! - JsonEventSink: NDJSON output for scripts and CI

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
