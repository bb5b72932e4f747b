//! Domain Value Objects
//!
//! Immutable value types that describe one mirror run.

mod mirror;
mod remote_target;
mod source_dir;

pub use mirror::{MirrorOptions, MirrorReport, DEFAULT_SSH_PORT};
pub use remote_target::RemoteTarget;
pub use source_dir::SourceDir;
