//! FileSystem port - abstraction over file I/O operations
//!
//! The classification engine only needs existence checks, non-recursive
//! listings, recursive mkdir and single-file copy; the summary step also
//! reads templates and writes rendered text. Implementations:
//! - `LocalFs` - standard file I/O
//! - `MockFs` - in-memory, for tests

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to a raw `io::Error`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// One entry of a non-recursive directory listing
///
/// `name` is for matching and log text. Paths are built from `file_name`,
/// which is the exact on-disk name even when it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub file_name: OsString,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(file_name: impl Into<OsString>, is_dir: bool) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_dir,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, false)
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, true)
    }

    /// Path of this entry inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// Abstract file system interface
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists at `path`
    fn is_dir(&self, path: &Path) -> bool;

    /// List immediate children of a directory
    ///
    /// Ordering is implementation-defined; callers needing a specific
    /// order must sort.
    fn list_entries(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Read a whole UTF-8 file
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Create directory and parents (no error if already present)
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a single file. Overwrites `dst`; callers check existence first.
    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()>;

    /// Write content to a file atomically
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        (**self).list_entries(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        (**self).read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        (**self).copy_file(src, dst)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write(path, content)
    }
}
