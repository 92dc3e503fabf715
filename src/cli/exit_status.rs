use std::process::ExitCode;

/// Exit status of `i18n-lint`.
///
/// - `Success` (0): no error-severity issues (warnings alone do not fail)
/// - `Failure` (1): error-severity issues found, or fixes pending in dry-run
/// - `Error` (2): the run itself failed (bad config, unwritable file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
