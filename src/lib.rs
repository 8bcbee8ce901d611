//! DOE builder - assembles a "Dossier des Ouvrages Exécutés"
//!
//! Reads a source folder holding one sub-folder per machine
//! (`M1_Master 1`, `M1_Redu`, ...) and sorts their documentation into a
//! dated `DOE_<YYYY-MM-DD>` tree with four numbered top-level sections.
//! Runs are additive: existing files are never overwritten, so re-running on
//! the same day only fills the gaps.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

use std::path::{Path, PathBuf};

// Re-exports for convenience
pub use application::{SynthesisOptions, SynthesisResult, SynthesisUseCase};
pub use config::Config;
pub use domain::entities::{LogEntry, LogLevel, RunOutcome};
pub use domain::ports::{FileSystem, SummaryRecord, SynthesisEvent, SynthesisEventSink};
pub use domain::value_objects::{DoeRoot, Phase};
pub use error::{DoeError, DoeResult};
pub use infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, TemplateRenderer};

/// Build today's DOE under `dest_root` from the machines in `source_root`
///
/// Relative roots are resolved against the working directory, so machine
/// paths in the log are absolute. Returns the run log, one entry per line.
pub fn run(source_root: &Path, dest_root: &Path) -> String {
    let options = SynthesisOptions::new(absolute(source_root), absolute(dest_root));
    SynthesisUseCase::new(LocalFs::new())
        .execute(&options)
        .log_text()
}

/// `path` made absolute; left as given when the working directory is unknown
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
