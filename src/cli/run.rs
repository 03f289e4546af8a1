//! Dispatch a parsed command to its handler.
//!
//! Handlers return `Ok(CommandResult)` with diagnostics and a per-command
//! summary, or `Err` for configuration problems (invalid config, missing or
//! unsupported sources).

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
