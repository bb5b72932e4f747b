//! Remote target value object - the `user@host:path` destination spec

use std::fmt;
use std::str::FromStr;

use crate::error::{SitepushError, SitepushResult};

/// Destination of a mirror: a login on a remote host plus a directory there.
///
/// Always renders as `user@host:path`. The user is mandatory so the spec
/// handed to the transfer utility never depends on the local login name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteTarget {
    user: String,
    host: String,
    path: String,
}

impl RemoteTarget {
    /// Create a remote target from its three parts.
    ///
    /// An empty `path` means the remote login directory (`.`).
    pub fn new(
        user: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> SitepushResult<Self> {
        let user = user.into();
        let host = host.into();
        let mut path = path.into();
        let spec = format!("{}@{}:{}", user, host, path);

        if user.is_empty() {
            return Err(invalid(spec, "missing user"));
        }
        if user.contains(['@', ':']) || user.contains(char::is_whitespace) {
            return Err(invalid(spec, "user must not contain '@', ':' or whitespace"));
        }
        if user.starts_with('-') {
            return Err(invalid(spec, "user must not start with '-'"));
        }
        if host.is_empty() {
            return Err(invalid(spec, "missing host"));
        }
        if host.contains(['@', ':']) || host.contains(char::is_whitespace) {
            return Err(invalid(spec, "host must not contain '@', ':' or whitespace"));
        }
        if host.starts_with('-') {
            return Err(invalid(spec, "host must not start with '-'"));
        }
        if path.is_empty() {
            path.push('.');
        }

        Ok(Self { user, host, path })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn invalid(spec: String, reason: &'static str) -> SitepushError {
    SitepushError::InvalidRemote { spec, reason }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host, self.path)
    }
}

impl FromStr for RemoteTarget {
    type Err = SitepushError;

    /// Parse `user@host:path` or `user@host` (path defaults to `.`).
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (login, path) = spec.split_once(':').unwrap_or((spec, ""));
        let Some((user, host)) = login.split_once('@') else {
            return Err(invalid(spec.to_string(), "missing user (expected user@host:path)"));
        };
        Self::new(user, host, path)
    }
}
