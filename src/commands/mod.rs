//! Subcommand implementations
//!
//! Each `cmd_*` returns the process exit status on completion; `Err` is
//! reserved for failures of sitepush itself (bad configuration, I/O).

mod config;
mod deploy;
mod plan;

pub use config::cmd_config;
pub use deploy::cmd_deploy;
pub use plan::cmd_plan;

use anyhow::{Context, Result};
use sitepush::config::{process_env, resolve, ConfigPaths, DeployConfig};
use tracing::{debug, warn};

use crate::cli::TargetArgs;

/// Resolve file and environment layers, then apply CLI flags on top.
fn resolve_config(target: &TargetArgs) -> Result<DeployConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let paths = ConfigPaths::discover(&cwd, process_env);
    let loaded = resolve(&paths, process_env)?;

    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    match &loaded.file {
        Some(file) => debug!(file = %file.display(), "using config file"),
        None => debug!("using built-in defaults"),
    }

    let mut config = loaded.config.deploy;
    config.apply(&target.overrides());
    Ok(config)
}
