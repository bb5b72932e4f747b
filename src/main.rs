//! sitepush CLI - mirror a generated static site to its web server
//!
//! Usage: sitepush <COMMAND>
//!
//! Commands:
//!   deploy  Mirror the generated site to the remote host
//!   plan    Print the rsync command `deploy` would run
//!   config  Print the resolved configuration
//!
//! The exit status of `deploy` is rsync's exit status.

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    sitepush::logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(exit_status(code)),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Deploy(args) => commands::cmd_deploy(args, cli.json),
        Commands::Plan(args) => commands::cmd_plan(args, cli.json),
        Commands::Config(target) => commands::cmd_config(target, cli.json),
    }
}

/// Map a child's exit status onto ours; out-of-range values become 1
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
