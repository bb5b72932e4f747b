//! Error types for sitepush
//!
//! Uses `thiserror` for library errors. Transfer failures have their own
//! type in [`crate::domain::ports::TransferError`] since they carry the
//! utility's exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepush operations
pub type SitepushResult<T> = Result<T, SitepushError>;

/// Configuration and value errors
#[derive(Error, Debug)]
pub enum SitepushError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has values of the wrong type
    #[error("invalid config file {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file named by an environment variable does not exist
    #[error("config file not found: {path} (set by {var})")]
    ConfigNotFound { path: PathBuf, var: &'static str },

    /// Destination spec cannot be turned into `user@host:path`
    #[error("invalid remote '{spec}': {reason}")]
    InvalidRemote { spec: String, reason: &'static str },

    /// SSH port out of range
    #[error("invalid port {port}: must be between 1 and 65535")]
    InvalidPort { port: u32 },
}
