use anyhow::{Context, Result};
use sitepush::Config;

use crate::cli::TargetArgs;
use crate::ui::json;

pub fn cmd_config(target: &TargetArgs, json_mode: bool) -> Result<i32> {
    let config = Config {
        deploy: super::resolve_config(target)?,
    };

    if json_mode {
        json::emit(&serde_json::json!({
            "event": "config",
            "config": config,
        }))?;
    } else {
        print!("{}", config.to_toml().context("failed to render config")?);
    }

    Ok(0)
}
