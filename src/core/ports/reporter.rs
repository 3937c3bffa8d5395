//! Reporter port
//!
//! The engine notifies a reporter as rules are evaluated, so output streams
//! while the run progresses.

use super::super::models::{EvaluationResult, RunOutcome};

/// Receives evaluation events in order
pub trait Reporter {
    /// Every rule of a group passed
    fn group_passed(&mut self, group: &str, message: &str);

    /// A rule failed
    fn rule_failed(&mut self, result: &EvaluationResult);

    /// The run reached a terminal state
    fn finished(&mut self, outcome: &RunOutcome);
}

/// Reporter that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn group_passed(&mut self, _group: &str, _message: &str) {}

    fn rule_failed(&mut self, _result: &EvaluationResult) {}

    fn finished(&mut self, _outcome: &RunOutcome) {}
}
