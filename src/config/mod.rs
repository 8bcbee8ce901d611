//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOE_*)
//! 3. `--config <file>` or `./doe.toml`
//! 4. User config (`<config dir>/doe/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, OutputFormat, SummaryConfig};
