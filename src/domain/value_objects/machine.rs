//! Machine value objects

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::naming;

/// A source subdirectory representing one physical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineDirectory {
    /// Raw directory name, e.g. `M1_Master 1`
    pub name: String,
    /// Full path of the directory
    pub path: PathBuf,
}

impl MachineDirectory {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn canonical_id(&self) -> CanonicalMachineId {
        CanonicalMachineId(naming::destination_folder_name(&self.name))
    }
}

/// Destination folder name derived from a machine name (`M1_L1`, `M1_Red`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalMachineId(String);

impl CanonicalMachineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalMachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for CanonicalMachineId {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
