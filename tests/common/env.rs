//! Test environment builder for isolated sitepush testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a sitepush CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Provides:
/// - a project directory (the working directory for every run)
/// - a HOME directory so no real user config is picked up
/// - a `bin/` directory holding a fake `rsync` that answers `--version`,
///   records any other arguments one per line and exits with
///   `$FAKE_RSYNC_EXIT` (or kills itself with `$FAKE_RSYNC_SIGNAL`)
/// - a scrubbed environment (only PATH, HOME and XDG_CONFIG_HOME are set)
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin_dir: PathBuf,
    log_path: PathBuf,
    sitepush_bin: PathBuf,
}

impl TestEnv {
    /// Environment with a fake `rsync` on PATH
    pub fn new() -> Self {
        let env = Self::without_rsync();
        env.install_fake_rsync();
        env
    }

    /// Environment whose PATH holds nothing but an empty bin directory
    pub fn without_rsync() -> Self {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let bin_dir = home_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_path = home_dir.path().join("rsync.log");

        Self {
            project_root,
            home_dir,
            bin_dir,
            log_path,
            sitepush_bin: PathBuf::from(env!("CARGO_BIN_EXE_sitepush")),
        }
    }

    #[cfg(unix)]
    fn install_fake_rsync(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "rsync  version 3.2.7  protocol version 31"
  exit 0
fi
printf '%s\n' "$@" > "{log}"
if [ -n "${{FAKE_RSYNC_STDOUT-}}" ]; then
  printf '%s\n' "$FAKE_RSYNC_STDOUT"
fi
if [ -n "${{FAKE_RSYNC_SIGNAL-}}" ]; then
  kill -"$FAKE_RSYNC_SIGNAL" $$
fi
exit "${{FAKE_RSYNC_EXIT:-0}}"
"#,
            log = self.log_path.display()
        );
        let path = self.bin_dir.join("rsync");
        fs::write(&path, script).expect("Failed to write fake rsync");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake rsync executable");
    }

    #[cfg(not(unix))]
    fn install_fake_rsync(&self) {}

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Arguments the fake rsync received on its last run, if it ran
    pub fn rsync_args(&self) -> Option<Vec<String>> {
        let log = fs::read_to_string(&self.log_path).ok()?;
        Some(log.lines().map(str::to_string).collect())
    }

    /// Run sitepush from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run sitepush from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run sitepush from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.sitepush_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("PATH", &self.bin_dir)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute sitepush");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// The exact arguments for the default configuration
pub fn default_rsync_args() -> Vec<String> {
    [
        "-e",
        "ssh -p 2222",
        "-z",
        "-r",
        "-c",
        "--delete",
        "output/",
        "deploy@blog.example.org:/var/www/blog",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
