//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod summary_renderer;
pub mod synthesis_events;

pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use summary_renderer::{RenderReport, SummaryRecord, SummaryRenderer};
pub use synthesis_events::{NoopEventSink, SynthesisEvent, SynthesisEventSink};
