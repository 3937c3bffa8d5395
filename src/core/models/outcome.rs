//! Evaluation results and run outcomes
//!
//! Produced fresh by every run and never persisted.

use serde::Serialize;

/// Pass or fail for a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The predicate held
    Pass,
    /// The predicate did not hold
    Fail,
}

/// What an evaluator returns
///
/// `detail` names the offending item (missing key, matching line, path) and
/// is substituted into the rule's failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The predicate held
    Pass,
    /// The predicate did not hold
    Fail {
        /// Offending item, if the predicate can name one
        detail: Option<String>,
    },
}

impl Verdict {
    /// Failure with a detail
    pub fn fail_with(detail: impl Into<String>) -> Self {
        Self::Fail {
            detail: Some(detail.into()),
        }
    }

    /// Whether the predicate held
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail { detail: None } }
    }
}

/// Result of evaluating one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    /// Rule id
    pub rule: String,
    /// Group the rule belongs to
    pub group: String,
    /// Pass or fail
    pub outcome: Outcome,
    /// Rendered message (success or failure)
    pub message: String,
}

impl EvaluationResult {
    /// Whether the rule passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}

/// Terminal status of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rule", rename_all = "snake_case")]
pub enum RunStatus {
    /// Every rule passed
    Success,
    /// The named rule was the first to fail
    FailedAt(String),
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunOutcome {
    /// Results in evaluation order
    pub results: Vec<EvaluationResult>,
}

impl RunOutcome {
    /// Terminal status derived from the results
    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.results
            .iter()
            .find(|r| !r.passed())
            .map_or(RunStatus::Success, |r| RunStatus::FailedAt(r.rule.clone()))
    }

    /// Whether every evaluated rule passed
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.results.iter().all(EvaluationResult::passed)
    }

    /// Failed results, in evaluation order
    pub fn failures(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}
