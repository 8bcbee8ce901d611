//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
//! Listings are returned in path order, which keeps tests deterministic.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

#[derive(Clone, Default)]
pub struct MockFs {
    nodes: Arc<Mutex<BTreeMap<PathBuf, Node>>>,
    failing_names: Arc<Mutex<BTreeSet<String>>>,
    copies: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.lock().unwrap();
        Self::insert_dir_all(&mut nodes, path.as_ref());
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut nodes = self.nodes.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::insert_dir_all(&mut nodes, parent);
        }
        nodes.insert(path.to_path_buf(), Node::File(content.as_bytes().to_vec()));
    }

    /// Make every copy whose source file name equals `name` fail
    pub fn fail_copies_of(&self, name: &str) {
        self.failing_names.lock().unwrap().insert(name.to_string());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.lock().unwrap().get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    /// All (src, dst) pairs passed to `copy_file`, in call order
    pub fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.copies.lock().unwrap().clone()
    }

    /// Paths of every file below `root`
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .filter(|(path, node)| matches!(node, Node::File(_)) && path.starts_with(root))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn insert_dir_all(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.lock().unwrap().get(path), Some(Node::Dir))
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let nodes = self.nodes.lock().unwrap();
        if !matches!(nodes.get(path), Some(Node::Dir)) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?;
                Some(DirEntry::new(name, matches!(node, Node::Dir)))
            })
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.read(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        Self::insert_dir_all(&mut nodes, path);
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing_names.lock().unwrap().contains(&name) {
            return Err(FsError::from_io(
                std::io::Error::other("simulated copy failure"),
                dst,
            ));
        }

        let mut nodes = self.nodes.lock().unwrap();
        let content = match nodes.get(src) {
            Some(Node::File(bytes)) => bytes.clone(),
            _ => return Err(FsError::NotFound(src.to_path_buf())),
        };
        match dst.parent() {
            Some(parent) if matches!(nodes.get(parent), Some(Node::Dir)) => {}
            _ => return Err(FsError::NotFound(dst.to_path_buf())),
        }
        nodes.insert(dst.to_path_buf(), Node::File(content));
        drop(nodes);

        self.copies
            .lock()
            .unwrap()
            .push((src.to_path_buf(), dst.to_path_buf()));
        Ok(())
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::insert_dir_all(&mut nodes, parent);
        }
        nodes.insert(path.to_path_buf(), Node::File(content.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_sorted_and_typed() {
        let fs = MockFs::new();
        fs.add_file("/a/z.txt", "z");
        fs.add_dir("/a/b");

        let entries = fs.list_entries(Path::new("/a")).unwrap();
        assert_eq!(entries, vec![DirEntry::dir("b"), DirEntry::file("z.txt")]);
    }

    #[test]
    fn copy_requires_parent_dir() {
        let fs = MockFs::new();
        fs.add_file("/src/a.txt", "a");

        assert!(fs.copy_file(Path::new("/src/a.txt"), Path::new("/dst/a.txt")).is_err());

        fs.add_dir("/dst");
        fs.copy_file(Path::new("/src/a.txt"), Path::new("/dst/a.txt"))
            .unwrap();
        assert_eq!(fs.read("/dst/a.txt").as_deref(), Some("a"));
    }

    #[test]
    fn failing_names_simulate_io_errors() {
        let fs = MockFs::new();
        fs.add_file("/src/bad.pdf", "x");
        fs.add_dir("/dst");
        fs.fail_copies_of("bad.pdf");

        let err = fs
            .copy_file(Path::new("/src/bad.pdf"), Path::new("/dst/bad.pdf"))
            .unwrap_err();
        assert!(matches!(err, FsError::Io { .. }));
        assert!(fs.copies().is_empty());
    }
}
