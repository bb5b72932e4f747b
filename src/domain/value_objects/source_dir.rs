//! Source directory value object
//!
//! The local tree that gets mirrored. Transfer utilities in the rsync
//! family copy the directory itself when the source path has no trailing
//! separator and only its contents when it has one. `SourceDir` always
//! hands out the contents form, so `output` and `output/` deploy the same
//! files to the same remote location.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Local directory whose contents are mirrored to the remote path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    path: PathBuf,
}

impl SourceDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path as configured
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path argument for the transfer utility, ending in exactly one `/`.
    ///
    /// An empty path means the current directory (`./`); a path made only
    /// of separators means the filesystem root (`/`). A relative path that
    /// starts with `-` gets a `./` prefix so it is never read as an option.
    pub fn contents_arg(&self) -> OsString {
        let raw = self.path.to_string_lossy();
        let trimmed = raw.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);

        if trimmed.starts_with('-') {
            return OsString::from(format!("./{}/", trimmed));
        }
        if !trimmed.is_empty() {
            return OsString::from(format!("{}/", trimmed));
        }
        if raw.is_empty() {
            OsString::from("./")
        } else {
            OsString::from("/")
        }
    }
}

impl fmt::Display for SourceDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contents_arg().to_string_lossy())
    }
}
