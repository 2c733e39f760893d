//! Configuration file loading for statehouse
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./statehouse.toml` or `./.statehouse.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/statehouse/config.toml`
//! 4. Fallback: `~/.config/statehouse/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileAssistantConfig, FileConfig, FileOpenLegConfig, FileOutputConfig};
pub use loader::{ConfigError, ConfigLoader};
