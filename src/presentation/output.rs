//! Output Rendering

use std::ffi::OsString;

use serde::Serialize;

use crate::application::{DeployOutcome, DeployPlan};
use crate::domain::value_objects::MirrorReport;

/// Quote one word for a POSIX shell, leaving plain words untouched
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

/// Render a program and its arguments as a copy-pasteable command line
pub fn render_command(program: &OsString, args: &[OsString]) -> String {
    std::iter::once(program)
        .chain(args)
        .map(|word| shell_quote(&word.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// JSON summary of one deploy
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub event: &'static str,
    pub status: &'static str,
    pub source: String,
    pub destination: String,
    pub port: u16,
    pub dry_run: bool,
    pub changed: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub itemized: Vec<String>,
    pub exit_code: i32,
}

impl DeployReport {
    pub fn new(plan: &DeployPlan, outcome: DeployOutcome) -> Self {
        let exit_code = outcome.exit_code();
        let (status, report) = match outcome {
            DeployOutcome::Completed(report) => ("completed", report),
            DeployOutcome::Failed { .. } => ("failed", MirrorReport::default()),
        };

        Self {
            event: "deploy",
            status,
            source: plan.source.to_string(),
            destination: plan.destination.to_string(),
            port: plan.mirror.port,
            dry_run: plan.mirror.dry_run,
            changed: report.changed,
            itemized: report.itemized,
            exit_code,
        }
    }
}
