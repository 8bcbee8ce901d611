//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DoeResult;

use super::loader::{self, ConfigWarning};

/// Summary document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Directory holding `0_1 - En tete DOE.txt` and `0_2 - Sommaire DOE.txt`;
    /// built-in templates when unset
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// DOE version used when `--doe-version` is not given
    #[serde(default = "default_doe_version")]
    pub doe_version: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            doe_version: default_doe_version(),
        }
    }
}

fn default_doe_version() -> String {
    "1".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Report format of `doe build`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DoeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DoeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration file for `cwd` and apply `DOE_*` overrides
    pub fn load_or_default(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> DoeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit, cwd)
    }
}
