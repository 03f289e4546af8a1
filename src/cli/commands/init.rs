use std::fs;

use anyhow::{Context, Result};

use super::super::args::InitCommand;
use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a starter config into the project directory, never overwriting.
pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.common.root_dir().join(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        None
    };

    Ok(finish(
        CommandSummary::Init(InitSummary {
            path: config_path,
            error,
        }),
        Vec::new(),
    ))
}
