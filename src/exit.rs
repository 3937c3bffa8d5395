//! Exit coordination
//!
//! Maps the outcome of a run to a process exit status. CI systems branch on
//! this status only, never on the printed messages.

use crate::core::models::{RunOutcome, RunStatus};

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every rule passed
    Success,
    /// A rule failed
    Violation,
    /// The run could not complete (unreadable artifact, bad config, no root)
    Error,
}

impl ExitStatus {
    /// Numeric exit code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Violation => 1,
            Self::Error => 2,
        }
    }
}

impl From<&RunOutcome> for ExitStatus {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome.status() {
            RunStatus::Success => Self::Success,
            RunStatus::FailedAt(_) => Self::Violation,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}
