//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Mock)
//! - `events/` - Event sinks (Console, JSON)
//! - `render/` - Summary document renderer

pub mod events;
pub mod fs;
pub mod render;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use render::TemplateRenderer;
