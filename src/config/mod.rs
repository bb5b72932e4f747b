//! Configuration module for sitepush
//!
//! Builds the explicit `DeployConfig` that is passed into the deploy use
//! case. See `loader` for the layer order.

mod loader;
mod types;

pub use loader::{
    load_with_warnings, process_env, resolve, with_env_overrides, ConfigPaths, ConfigWarning,
    LoadedConfig, CONFIG_FILE_NAME, ENV_CONFIG, ENV_HOST, ENV_PORT, ENV_REMOTE_PATH,
    ENV_SOURCE, ENV_USER,
};
pub use types::{
    Config, DeployConfig, DeployOverrides, DEFAULT_HOST, DEFAULT_REMOTE_PATH, DEFAULT_SOURCE,
    DEFAULT_USER,
};
