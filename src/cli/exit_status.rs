use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): every catalog was built without error diagnostics
/// - `Failure` (1): catalogs were written but some calls or files were rejected
/// - `Error` (2): the run was aborted before writing (configuration error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
