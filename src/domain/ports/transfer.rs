//! Transfer Port
//!
//! Abstracts the external utility that performs the actual mirror, so the
//! deploy use case can run against a recording fake in tests.

use crate::domain::value_objects::{MirrorOptions, MirrorReport, RemoteTarget, SourceDir};
use thiserror::Error;

/// Exit status used when the utility could not be started at all
pub const EXIT_NOT_AVAILABLE: i32 = 127;

/// Shells report death by signal N as 128 + N
const EXIT_SIGNAL_BASE: i32 = 128;

/// Error during a mirror run
#[derive(Debug, Error)]
pub enum TransferError {
    /// The utility could not be spawned (missing from PATH, not executable)
    #[error("{program} is not available: {source}")]
    NotAvailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The utility ran and exited non-zero
    #[error("{program} failed with exit code {code}")]
    Failed { program: String, code: i32 },

    /// The utility was killed before it could exit
    #[error("{program} was terminated by a signal")]
    Terminated {
        program: String,
        signal: Option<i32>,
    },

    /// Relaying the utility's output failed
    #[error("I/O error while relaying {program} output: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl TransferError {
    /// Process exit status that reports this error to the caller
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotAvailable { .. } => EXIT_NOT_AVAILABLE,
            Self::Failed { code, .. } => *code,
            Self::Terminated {
                signal: Some(signal),
                ..
            } => EXIT_SIGNAL_BASE + *signal,
            Self::Terminated { signal: None, .. } | Self::Io { .. } => 1,
        }
    }
}

/// One-way mirror of a local directory to a remote directory
pub trait Transfer: Send + Sync {
    /// Name of the utility (for logging)
    fn name(&self) -> &'static str;

    /// Check if the utility can be run on this system
    fn is_available(&self) -> bool;

    /// Make `destination` match the contents of `source` exactly.
    ///
    /// Runs once and blocks until done. No retries; a failure leaves the
    /// remote in whatever state the utility left it.
    fn mirror(
        &self,
        source: &SourceDir,
        destination: &RemoteTarget,
        options: &MirrorOptions,
    ) -> Result<MirrorReport, TransferError>;
}

impl<T: Transfer + ?Sized> Transfer for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn mirror(
        &self,
        source: &SourceDir,
        destination: &RemoteTarget,
        options: &MirrorOptions,
    ) -> Result<MirrorReport, TransferError> {
        (**self).mirror(source, destination, options)
    }
}
