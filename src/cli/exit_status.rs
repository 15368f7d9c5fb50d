use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, possibly with warnings
/// - `Failure` (1): Command refused to run (e.g. config file already exists)
/// - `Error` (2): Command aborted on a fatal error (unreadable file, malformed row, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, possibly with warnings.
    Success,
    /// Command refused to run.
    Failure,
    /// Command aborted on a fatal error.
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
