//! Mirror options and report

use serde::Serialize;

/// Default SSH port the remote host listens on
pub const DEFAULT_SSH_PORT: u16 = 2222;

/// Options for a single mirror run.
///
/// Compression, recursion, checksum comparison and deletion of
/// destination-only files are not options: every mirror uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorOptions {
    /// SSH port of the remote host
    pub port: u16,
    /// Ask the utility to report what it would do without changing anything
    pub dry_run: bool,
    /// Ask the utility to itemize each change so it can be counted
    pub itemize: bool,
    /// Do not pass the utility's stdout through
    pub quiet: bool,
}

impl MirrorOptions {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            dry_run: false,
            itemize: false,
            quiet: false,
        }
    }
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SSH_PORT)
    }
}

/// Result of a successful mirror
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MirrorReport {
    /// Number of changed entries, known only when changes were itemized
    pub changed: Option<usize>,
    /// Raw itemized change lines as reported by the utility
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub itemized: Vec<String>,
}

impl MirrorReport {
    pub fn from_itemized(itemized: Vec<String>) -> Self {
        Self {
            changed: Some(itemized.len()),
            itemized,
        }
    }

    /// True when the run is known to have changed nothing remotely
    pub fn is_noop(&self) -> bool {
        self.changed == Some(0)
    }
}
