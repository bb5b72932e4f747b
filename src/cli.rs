//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sitepush::config::DeployOverrides;

/// sitepush - mirror a generated static site to its web server
#[derive(Parser, Debug)]
#[command(name = "sitepush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror the generated site to the remote host
    Deploy(DeployArgs),

    /// Print the rsync command `deploy` would run, without running it
    Plan(DeployArgs),

    /// Print the resolved configuration
    Config(TargetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Ask rsync what it would change without changing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Itemize and count changed files
    #[arg(short, long)]
    pub itemize: bool,
}

/// Overrides for the configured values
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Local directory produced by the site generator
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Remote login name
    #[arg(long)]
    pub user: Option<String>,

    /// Remote host
    #[arg(long)]
    pub host: Option<String>,

    /// Remote SSH port
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Destination directory on the remote host
    #[arg(long, value_name = "PATH")]
    pub remote_path: Option<String>,
}

impl TargetArgs {
    pub fn overrides(&self) -> DeployOverrides {
        DeployOverrides {
            source: self.source.clone(),
            user: self.user.clone(),
            host: self.host.clone(),
            port: self.port,
            remote_path: self.remote_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_needs_no_arguments() {
        let cli = Cli::try_parse_from(["sitepush", "deploy"]).unwrap();
        match cli.command {
            Commands::Deploy(args) => {
                assert!(!args.dry_run);
                assert_eq!(args.target.overrides(), DeployOverrides::default());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sitepush", "deploy", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn overrides_are_collected() {
        let cli = Cli::try_parse_from([
            "sitepush", "plan", "--source", "public", "--host", "example.net", "-p", "2200",
        ])
        .unwrap();
        let Commands::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        let overrides = args.target.overrides();
        assert_eq!(overrides.source, Some(PathBuf::from("public")));
        assert_eq!(overrides.host.as_deref(), Some("example.net"));
        assert_eq!(overrides.port, Some(2200));
    }

    #[test]
    fn port_zero_is_rejected() {
        assert!(Cli::try_parse_from(["sitepush", "deploy", "--port", "0"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["sitepush"]).is_err());
    }
}
