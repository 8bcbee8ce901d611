//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Directory listings are sorted by name so that "first machine" and
/// "first matching file" do not depend on the platform's readdir order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir())
                .map_err(|e| FsError::from_io(e, &entry.path()))?;
            entries.push(DirEntry::new(entry.file_name(), is_dir));
        }
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        // Source problems name the source; anything after that is the destination's
        std::fs::File::open(src).map_err(|e| FsError::from_io(e, src))?;
        std::fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| FsError::from_io(e, dst))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        // Temp file in the same directory so the rename stays on one volume
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        tmp.write_all(content)
            .map_err(|e| FsError::from_io(e, path))?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }
}
