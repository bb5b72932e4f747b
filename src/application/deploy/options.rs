//! Deploy options and outcomes

use serde::Serialize;

use crate::config::DeployConfig;
use crate::domain::value_objects::{MirrorOptions, MirrorReport, RemoteTarget, SourceDir};
use crate::error::SitepushResult;

/// Per-invocation switches that are not part of the configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Let the utility report what it would change without changing it
    pub dry_run: bool,
    /// Count changed entries from itemized output
    pub itemize: bool,
    /// Keep the utility's stdout off the terminal (JSON mode)
    pub quiet: bool,
}

/// Everything a single mirror run is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub source: SourceDir,
    pub destination: RemoteTarget,
    pub mirror: MirrorOptions,
}

impl DeployPlan {
    /// Resolve the plan for `config`; fails on an unusable host, user or port
    pub fn from_config(config: &DeployConfig, options: &DeployOptions) -> SitepushResult<Self> {
        let mut mirror = MirrorOptions::new(config.ssh_port()?);
        mirror.dry_run = options.dry_run;
        mirror.itemize = options.itemize;
        mirror.quiet = options.quiet;

        Ok(Self {
            source: config.source_dir(),
            destination: config.remote_target()?,
            mirror,
        })
    }
}

/// Terminal state of a deploy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeployOutcome {
    /// The utility exited 0
    Completed(MirrorReport),
    /// The utility ran and failed; the remote may be partially updated
    Failed { exit_code: i32 },
}

impl DeployOutcome {
    /// Process exit status to hand back to the caller
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed(_) => 0,
            Self::Failed { exit_code } => *exit_code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
