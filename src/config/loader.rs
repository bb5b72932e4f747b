//! Configuration loading
//!
//! Layers, highest priority first:
//! 1. CLI flags (applied by the caller via `DeployConfig::apply`)
//! 2. Environment variables (`SITEPUSH_*`)
//! 3. Project config (`./sitepush.toml`, or the file named by `SITEPUSH_CONFIG`)
//! 4. User config (`<config_dir>/sitepush/config.toml`), only when there is no project file
//! 5. Built-in defaults

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SitepushError, SitepushResult};

use super::types::Config;

pub const CONFIG_FILE_NAME: &str = "sitepush.toml";

pub const ENV_CONFIG: &str = "SITEPUSH_CONFIG";
pub const ENV_SOURCE: &str = "SITEPUSH_SOURCE";
pub const ENV_USER: &str = "SITEPUSH_USER";
pub const ENV_HOST: &str = "SITEPUSH_HOST";
pub const ENV_PORT: &str = "SITEPUSH_PORT";
pub const ENV_REMOTE_PATH: &str = "SITEPUSH_REMOTE_PATH";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no field reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Environment variable whose value was ignored
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            Self::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {}='{}': expected {}", var, value, expected),
        }
    }
}

/// Where config files are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Project config file (normally `./sitepush.toml`)
    pub project: PathBuf,
    /// Whether `project` was named explicitly and so must exist
    pub project_required: bool,
    /// User-level config file, if a config directory is known
    pub user: Option<PathBuf>,
}

impl ConfigPaths {
    /// Standard lookup locations relative to `project_root`
    pub fn discover(project_root: &Path, env: impl Fn(&str) -> Option<String>) -> Self {
        let (project, project_required) = match env(ENV_CONFIG).filter(|v| !v.is_empty()) {
            Some(path) => (PathBuf::from(path), true),
            None => (project_root.join(CONFIG_FILE_NAME), false),
        };

        Self {
            project,
            project_required,
            user: dirs::config_dir().map(|dir| dir.join("sitepush").join("config.toml")),
        }
    }
}

/// Fully resolved configuration plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config file that was read, if any
    pub file: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SitepushResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| SitepushError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SitepushError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layers, then apply environment overrides.
pub fn resolve(
    paths: &ConfigPaths,
    env: impl Fn(&str) -> Option<String>,
) -> SitepushResult<LoadedConfig> {
    let mut warnings = Vec::new();

    let file = if paths.project.is_file() {
        Some(paths.project.clone())
    } else if paths.project_required {
        return Err(SitepushError::ConfigNotFound {
            path: paths.project.clone(),
            var: ENV_CONFIG,
        });
    } else {
        paths.user.clone().filter(|p| p.is_file())
    };

    let config = match &file {
        Some(path) => {
            debug!(file = %path.display(), "loading config");
            let (config, file_warnings) = load_with_warnings(path)?;
            warnings.extend(file_warnings);
            config
        }
        None => {
            debug!("no config file found, using defaults");
            Config::default()
        }
    };

    let config = with_env_overrides(config, env, &mut warnings);

    Ok(LoadedConfig {
        config,
        file,
        warnings,
    })
}

/// Apply environment variable overrides (`SITEPUSH_*` prefix).
///
/// Empty values count as unset.
pub fn with_env_overrides(
    mut config: Config,
    env: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<ConfigWarning>,
) -> Config {
    let var = |name: &str| env(name).filter(|v| !v.is_empty());

    if let Some(source) = var(ENV_SOURCE) {
        config.deploy.source = PathBuf::from(source);
    }
    if let Some(user) = var(ENV_USER) {
        config.deploy.user = user;
    }
    if let Some(host) = var(ENV_HOST) {
        config.deploy.host = host;
    }
    if let Some(remote_path) = var(ENV_REMOTE_PATH) {
        config.deploy.remote_path = remote_path;
    }
    if let Some(port) = var(ENV_PORT) {
        let parsed = port.trim().parse::<u16>();
        match parsed {
            Ok(parsed) if parsed != 0 => config.deploy.port = parsed,
            _ => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_PORT,
                value: port,
                expected: "a port number between 1 and 65535",
            }),
        }
    }

    config
}

/// Read a variable from the process environment
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["deploy", "user", "host", "port", "remote_path", "source"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    // Only suggest if distance is reasonable (≤ 2 edits)
    best.filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance over chars, keeping one row of the table.
fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &wanted) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if source == wanted {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[target.len()]
}
