//! sitepush - publish a generated static site with one checksum mirror
//!
//! The site generator writes a directory (`output/` by default); sitepush
//! mirrors its contents to `user@host:path` over ssh by running rsync once
//! and passes rsync's exit status back to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployError, DeployOptions, DeployOutcome, DeployPlan, DeployUseCase};
pub use config::{Config, DeployConfig, DeployOverrides};
pub use domain::ports::{Transfer, TransferError};
pub use domain::value_objects::{MirrorOptions, MirrorReport, RemoteTarget, SourceDir};
pub use error::{SitepushError, SitepushResult};
pub use infrastructure::RsyncTransfer;
