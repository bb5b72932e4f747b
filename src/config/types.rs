//! Configuration types

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RemoteTarget, SourceDir, DEFAULT_SSH_PORT};
use crate::error::{SitepushError, SitepushResult};

/// Default local directory produced by the site generator
pub const DEFAULT_SOURCE: &str = "output";
pub const DEFAULT_USER: &str = "deploy";
pub const DEFAULT_HOST: &str = "blog.example.org";
pub const DEFAULT_REMOTE_PATH: &str = "/var/www/blog";

/// Main configuration structure (`sitepush.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Everything one deploy needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Remote login name
    pub user: String,
    /// Remote host address
    pub host: String,
    /// Remote SSH port
    pub port: u16,
    /// Destination directory on the remote host
    pub remote_path: String,
    /// Local directory whose contents are mirrored
    pub source: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_SSH_PORT,
            remote_path: DEFAULT_REMOTE_PATH.to_string(),
            source: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl DeployConfig {
    /// Destination spec built from user, host and remote path
    pub fn remote_target(&self) -> SitepushResult<RemoteTarget> {
        RemoteTarget::new(&self.user, &self.host, &self.remote_path)
    }

    pub fn source_dir(&self) -> SourceDir {
        SourceDir::new(&self.source)
    }

    /// Port as a validated value; 0 is not a usable SSH port
    pub fn ssh_port(&self) -> SitepushResult<u16> {
        if self.port == 0 {
            return Err(SitepushError::InvalidPort { port: 0 });
        }
        Ok(self.port)
    }

    /// Apply CLI flags on top of this config (highest priority layer)
    pub fn apply(&mut self, overrides: &DeployOverrides) {
        if let Some(source) = &overrides.source {
            self.source = source.clone();
        }
        if let Some(user) = &overrides.user {
            self.user = user.clone();
        }
        if let Some(host) = &overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(remote_path) = &overrides.remote_path {
            self.remote_path = remote_path.clone();
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOverrides {
    pub source: Option<PathBuf>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub remote_path: Option<String>,
}

impl Config {
    /// Render as TOML, the same layout the loader reads
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl fmt::Display for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}@{}:{} (port {})",
            self.source.display(),
            self.user,
            self.host,
            self.remote_path,
            self.port
        )
    }
}
