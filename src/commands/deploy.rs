use anyhow::Result;
use sitepush::config::DeployConfig;
use sitepush::presentation::DeployReport;
use sitepush::{DeployError, DeployOptions, DeployOutcome, DeployPlan, DeployUseCase, RsyncTransfer};
use tracing::{error, info};

use crate::cli::DeployArgs;
use crate::ui::json;

pub fn cmd_deploy(args: &DeployArgs, json_mode: bool) -> Result<i32> {
    let options = DeployOptions {
        dry_run: args.dry_run,
        itemize: args.itemize || json_mode,
        quiet: json_mode,
    };
    let (config, plan) = match prepare(args, &options) {
        Ok(prepared) => prepared,
        Err(err) if json_mode => {
            let message = format!("{err:#}");
            error!("{}", message);
            json::emit(&json::error_event("deploy", &message, 1))?;
            return Ok(1);
        }
        Err(err) => return Err(err),
    };

    let use_case = DeployUseCase::new(RsyncTransfer::new());
    match use_case.execute(&config, &options) {
        Ok(outcome) => {
            let exit_code = outcome.exit_code();
            if let DeployOutcome::Completed(report) = &outcome {
                if let Some(changed) = report.changed {
                    info!(changed, dry_run = options.dry_run, "deploy complete");
                }
            }
            if json_mode {
                json::emit(&DeployReport::new(&plan, outcome))?;
            }
            Ok(exit_code)
        }
        Err(err @ DeployError::Config(_)) if !json_mode => Err(err.into()),
        Err(err) => {
            error!("{}", err);
            if json_mode {
                json::emit(&json::error_event("deploy", &err.to_string(), err.exit_code()))?;
            }
            Ok(err.exit_code())
        }
    }
}

fn prepare(args: &DeployArgs, options: &DeployOptions) -> Result<(DeployConfig, DeployPlan)> {
    let config = super::resolve_config(&args.target)?;
    let plan = DeployPlan::from_config(&config, options)?;
    Ok((config, plan))
}
