//! Rsync Transfer
//!
//! Mirrors the source directory with rsync over ssh. The flag set is fixed:
//! compress, recurse, compare by checksum and delete destination-only files.

use crate::domain::ports::{Transfer, TransferError};
use crate::domain::value_objects::{MirrorOptions, MirrorReport, RemoteTarget, SourceDir};
use std::ffi::OsString;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Flags present on every invocation
pub const MIRROR_FLAGS: [&str; 4] = ["-z", "-r", "-c", "--delete"];

/// Transfer using the system `rsync` binary
#[derive(Debug, Clone)]
pub struct RsyncTransfer {
    program: OsString,
}

impl Default for RsyncTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl RsyncTransfer {
    /// Use `rsync` as found on PATH
    pub fn new() -> Self {
        Self::with_program("rsync")
    }

    /// Use a specific rsync binary
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Arguments for one mirror run, excluding the program itself.
    ///
    /// Order: transport, fixed flags, optional flags, source, destination.
    pub fn command_line(
        source: &SourceDir,
        destination: &RemoteTarget,
        options: &MirrorOptions,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            OsString::from("-e"),
            OsString::from(format!("ssh -p {}", options.port)),
        ];
        args.extend(MIRROR_FLAGS.iter().map(OsString::from));
        if options.itemize {
            args.push(OsString::from("--itemize-changes"));
        }
        if options.dry_run {
            args.push(OsString::from("--dry-run"));
        }
        args.push(source.contents_arg());
        args.push(OsString::from(destination.to_string()));
        args
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Copy the child's stdout line by line, collecting itemized changes.
    fn relay_stdout(
        &self,
        stdout: impl std::io::Read,
        options: &MirrorOptions,
    ) -> Result<Vec<String>, TransferError> {
        let io_err = |source| TransferError::Io {
            program: self.program_name(),
            source,
        };

        let mut itemized = Vec::new();
        let mut out = std::io::stdout().lock();
        for line in BufReader::new(stdout).lines() {
            let line = line.map_err(io_err)?;
            if !options.quiet {
                writeln!(out, "{}", line).map_err(io_err)?;
            }
            if is_itemized_change(&line) {
                itemized.push(line);
            }
        }
        out.flush().map_err(io_err)?;

        Ok(itemized)
    }
}

impl Transfer for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn mirror(
        &self,
        source: &SourceDir,
        destination: &RemoteTarget,
        options: &MirrorOptions,
    ) -> Result<MirrorReport, TransferError> {
        let args = Self::command_line(source, destination, options);
        debug!(program = %self.program_name(), ?args, "spawning transfer");

        // stdin stays attached so ssh can prompt for a passphrase
        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        let relay = options.itemize || options.quiet;
        if relay {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let mut child = cmd.spawn().map_err(|source| TransferError::NotAvailable {
            program: self.program_name(),
            source,
        })?;

        let itemized = match child.stdout.take() {
            Some(stdout) => self.relay_stdout(stdout, options),
            None => Ok(Vec::new()),
        };

        let status = child.wait().map_err(|source| TransferError::Io {
            program: self.program_name(),
            source,
        })?;
        let itemized = itemized?;

        match status.code() {
            Some(0) => {
                info!(%destination, changed = itemized.len(), "mirror finished");
                if options.itemize {
                    Ok(MirrorReport::from_itemized(itemized))
                } else {
                    Ok(MirrorReport::default())
                }
            }
            Some(code) => Err(TransferError::Failed {
                program: self.program_name(),
                code,
            }),
            None => Err(TransferError::Terminated {
                program: self.program_name(),
                signal: termination_signal(&status),
            }),
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Whether a line of `--itemize-changes` output describes a remote change.
///
/// Itemized lines look like `<fcsT...... path` or `*deleting   path`.
/// The 11-character code (9 on rsync 2.x) starts with an update type and a
/// file type; a `.` update type with only dots after it means "unchanged"
/// and is only printed at higher verbosity.
pub fn is_itemized_change(line: &str) -> bool {
    if line.starts_with("*deleting") {
        return true;
    }

    let Some((code, path)) = line.split_once(' ') else {
        return false;
    };
    if path.trim().is_empty() || !(9..=11).contains(&code.len()) {
        return false;
    }

    let mut chars = code.chars();
    let update = chars.next();
    let kind = chars.next();
    let attrs: Vec<char> = chars.collect();

    let known_update = matches!(update, Some('<' | '>' | 'c' | 'h' | '.'));
    let known_kind = matches!(kind, Some('f' | 'd' | 'L' | 'D' | 'S'));
    if !known_update || !known_kind {
        return false;
    }

    update != Some('.') || attrs.iter().any(|&c| c != '.' && c != ' ')
}
