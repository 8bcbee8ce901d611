//! Error types for the DOE builder
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for DOE builder operations
pub type DoeResult<T> = Result<T, DoeError>;

/// Main error type for DOE builder operations
#[derive(Error, Debug)]
pub enum DoeError {
    /// Source root missing at discovery time (aborts the run)
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Filesystem adapter failure on a single item
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error outside the filesystem adapter
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid `YYYY-MM-DD` date
    #[error("invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    /// Summary document could not be produced
    #[error("failed to render '{template}': {message}")]
    Render { template: String, message: String },
}
