//! Configuration file loading for streamchat
//!
//! Sources, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/streamchat/config.toml` (or the platform config dir)
//! 3. Project root: `./streamchat.toml` or `./.streamchat.toml`
//! 4. `--config <path>`
//! 5. `STREAMCHAT_<SECTION>__<KEY>` environment variables

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDeploymentConfig, FileInferenceConfig,
    FileLoggingConfig, FileSessionConfig, InferenceBackend, TEMPERATURE_RANGE,
};
pub use loader::ConfigLoader;
