use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub targets: Vec<TargetSummary>,
}

/// Outcome of building one catalog.
#[derive(Debug)]
pub struct TargetSummary {
    /// Output path as declared by the user.
    pub output: String,
    pub message_count: usize,
    pub file_count: usize,
    /// False when the catalog went to stdout.
    pub written: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running potgen commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Every diagnostic raised, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that could not be read or parsed.
    pub parse_error_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
