//! Machine discovery
//!
//! Selects the immediate subdirectories of a source root that represent
//! machines. Order is the adapter's enumeration order.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::services::naming::is_machine_name;
use crate::domain::value_objects::MachineDirectory;
use crate::error::{DoeError, DoeResult};

/// Discover machine directories under `source_root`
///
/// A missing source root is `DirectoryNotFound`; a root without machines
/// yields an empty list.
pub fn discover_machines<FS: FileSystem>(
    fs: &FS,
    source_root: &Path,
) -> DoeResult<Vec<MachineDirectory>> {
    if !fs.is_dir(source_root) {
        return Err(DoeError::DirectoryNotFound {
            path: source_root.to_path_buf(),
        });
    }

    let machines = fs
        .list_entries(source_root)?
        .into_iter()
        .filter(|entry| entry.is_dir && is_machine_name(&entry.name))
        .map(|entry| {
            let path = entry.path_in(source_root);
            MachineDirectory::new(entry.name, path)
        })
        .collect();

    Ok(machines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MockFs;

    #[test]
    fn keeps_only_machine_directories() {
        let fs = MockFs::new();
        fs.add_dir("/src/M1_Master 1");
        fs.add_dir("/src/M1_Redu");
        fs.add_dir("/src/Archive");
        fs.add_file("/src/M9_Master 9.txt", "not a dir");

        let machines = discover_machines(&fs, Path::new("/src")).unwrap();
        let names: Vec<_> = machines.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["M1_Master 1", "M1_Redu"]);
        assert_eq!(machines[0].path, Path::new("/src/M1_Master 1"));
    }

    #[test]
    fn keeps_enumeration_order() {
        let fs = MockFs::new();
        fs.add_dir("/src/B_Redu");
        fs.add_dir("/src/A_Master 2");

        let machines = discover_machines(&fs, Path::new("/src")).unwrap();
        let names: Vec<_> = machines.iter().map(|m| m.name.clone()).collect();
        let listed: Vec<_> = fs
            .list_entries(Path::new("/src"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, listed);
    }

    #[test]
    fn unnumbered_master_is_kept_and_maps_to_unknown() {
        let fs = MockFs::new();
        fs.add_dir("/src/M4_Master 4");

        let machines = discover_machines(&fs, Path::new("/src")).unwrap();
        assert_eq!(machines.len(), 1);
        assert_eq!(
            crate::domain::services::destination_folder_name(&machines[0].name),
            "M4_Unknown"
        );
    }

    #[test]
    fn empty_root_is_not_an_error() {
        let fs = MockFs::new();
        fs.add_dir("/src");

        let machines = discover_machines(&fs, Path::new("/src")).unwrap();
        assert!(machines.is_empty());
    }

    #[test]
    fn missing_root_is_directory_not_found() {
        let fs = MockFs::new();

        let err = discover_machines(&fs, Path::new("/missing")).unwrap_err();
        assert!(matches!(err, DoeError::DirectoryNotFound { ref path } if path == Path::new("/missing")));
    }
}
