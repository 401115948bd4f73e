//! Configuration file loading for virtual-teacher
//!
//! Sources, highest priority first:
//!
//! 1. `TUTOR_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tutor.toml` or `./.tutor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/virtual-teacher/config.toml`
//! 5. Default values
//!
//! Command-line flags override all of these in the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLoggingConfig, FileModelConfig, FileOutputConfig,
    FileProviderConfig, FileTutorConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
