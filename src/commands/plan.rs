use anyhow::Result;
use sitepush::presentation::render_command;
use sitepush::{DeployOptions, DeployPlan, RsyncTransfer, Transfer};
use tracing::warn;

use crate::cli::DeployArgs;
use crate::ui::json;

pub fn cmd_plan(args: &DeployArgs, json_mode: bool) -> Result<i32> {
    let config = super::resolve_config(&args.target)?;
    let options = DeployOptions {
        dry_run: args.dry_run,
        itemize: args.itemize,
        quiet: false,
    };
    let plan = DeployPlan::from_config(&config, &options)?;

    let transfer = RsyncTransfer::new();
    let rsync_args = RsyncTransfer::command_line(&plan.source, &plan.destination, &plan.mirror);
    let command = render_command(transfer.program(), &rsync_args);

    let available = transfer.is_available();
    if !available {
        warn!(
            "{} is not available on PATH; `sitepush deploy` would exit 127",
            transfer.name()
        );
    }

    if json_mode {
        let rsync_args: Vec<String> = rsync_args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        json::emit(&serde_json::json!({
            "event": "plan",
            "program": transfer.program().to_string_lossy(),
            "args": rsync_args,
            "command": command,
            "available": available,
        }))?;
    } else {
        println!("{}", command);
    }

    Ok(0)
}
