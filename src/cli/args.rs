//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Build POT catalogs from templates and scripts
//! - `init`: Write a starter `.potgenrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

/// Default output path when sources are given on the command line.
pub const DEFAULT_OUTPUT: &str = "messages.pot";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Files, directories or glob patterns (defaults to the configured targets)
    pub sources: Vec<String>,

    /// Catalog to write when sources are given [default: messages.pot]
    #[arg(short, long, requires = "sources")]
    pub output: Option<String>,

    /// Print catalogs to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into POT catalogs
    Extract(ExtractCommand),
    /// Initialize a new .potgenrc.json configuration file
    Init(InitCommand),
}
