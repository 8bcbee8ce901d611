//! Folder tree listing
//!
//! Text rendering of a directory tree for the summary document: at each
//! level directories come first, then files, both sorted alphabetically.

use std::cmp::Ordering;
use std::path::Path;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsResult};
use crate::domain::services::naming::fold;

pub const DIR_MARKER: &str = "📂";
pub const FILE_MARKER: &str = "📄";
const INDENT: &str = "    ";

/// Render the tree below `root` (the root itself is not listed)
pub fn folder_tree<FS: FileSystem>(fs: &FS, root: &Path) -> FsResult<String> {
    let mut out = String::new();
    walk(fs, root, 0, &mut out)?;
    Ok(out)
}

fn walk<FS: FileSystem>(fs: &FS, dir: &Path, depth: usize, out: &mut String) -> FsResult<()> {
    let mut entries = fs.list_entries(dir)?;
    entries.sort_by(compare_entries);

    for entry in entries {
        if entry.is_dir {
            out.push_str(&INDENT.repeat(depth));
            out.push_str(&format!("{DIR_MARKER} {}\n", entry.name));
            walk(fs, &entry.path_in(dir), depth + 1, out)?;
        } else {
            out.push_str(&INDENT.repeat(depth + 1));
            out.push_str(&format!("{FILE_MARKER} {}\n", entry.name));
        }
    }
    Ok(())
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| fold(&a.name).cmp(&fold(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}
