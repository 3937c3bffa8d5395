//! Conformance engine
//!
//! Evaluates an ordered list of rules against artifacts pulled from an
//! [`ArtifactSource`], notifying a [`Reporter`] as it goes.
//!
//! A run is a small state machine:
//!
//! ```text
//! Pending -> Running(0) -> Running(1) -> ... -> Succeeded
//!                 \              \
//!                  +--------------+--> Failed(rule)
//! ```
//!
//! Under [`EvaluationPolicy::FailFast`] the first failing rule moves the run
//! to `Failed` and nothing after it is evaluated. Under
//! [`EvaluationPolicy::CollectAll`] every rule is evaluated and the run ends
//! in `Failed` naming the first failure.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use thiserror::Error;

use super::evaluator;
use crate::core::models::{
    Artifact, ArtifactName, EvaluationResult, Outcome, Predicate, Rule, RuleError, RunOutcome,
    Verdict,
};
use crate::core::ports::{ArtifactSource, Reporter, ResolveError};

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum EngineError {
    /// An artifact could not be read for an infrastructure reason
    #[error(transparent)]
    Resolution(#[from] ResolveError),
}

/// What happens after a rule fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationPolicy {
    /// Stop at the first failing rule
    #[default]
    FailFast,
    /// Evaluate every rule and report every failure
    CollectAll,
}

/// Run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing evaluated yet
    Pending,
    /// The rule at `next` is about to be evaluated
    Running {
        /// Index of the next rule
        next: usize,
    },
    /// Every rule passed
    Succeeded,
    /// Terminal failure, naming the first failing rule
    Failed {
        /// Rule id
        rule: String,
    },
}

impl EngineState {
    /// Whether the run is over
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }
}

/// Holds the ordered policy and evaluates it
#[derive(Debug, Clone)]
pub struct ConformanceEngine {
    rules: Vec<Rule>,
    policy: EvaluationPolicy,
}

impl ConformanceEngine {
    /// Create an engine over `rules`, in the order given
    ///
    /// Rule ids must be unique. Rules of one group must be contiguous and
    /// share one success message.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        validate(&rules)?;
        Ok(Self {
            rules,
            policy: EvaluationPolicy::default(),
        })
    }

    /// Use a different evaluation policy
    #[must_use]
    pub const fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The rules, in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The evaluation policy
    #[must_use]
    pub const fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    /// Start a run without evaluating anything
    #[must_use]
    pub fn start<'a>(&'a self, source: &'a dyn ArtifactSource) -> Run<'a> {
        Run {
            engine: self,
            source,
            artifacts: HashMap::new(),
            state: EngineState::Pending,
            outcome: RunOutcome::default(),
            group_failed: false,
        }
    }

    /// Evaluate every rule until the run reaches a terminal state
    pub fn run(
        &self,
        source: &dyn ArtifactSource,
        reporter: &mut dyn Reporter,
    ) -> Result<RunOutcome, EngineError> {
        let mut run = self.start(source);
        while !run.state().is_terminal() {
            run.step(reporter)?;
        }
        Ok(run.into_outcome())
    }
}

/// One evaluation of the policy
///
/// Owns the outcome and the artifacts read so far. Each artifact is read at
/// most once per run.
pub struct Run<'a> {
    engine: &'a ConformanceEngine,
    source: &'a dyn ArtifactSource,
    artifacts: HashMap<ArtifactName, Artifact>,
    state: EngineState,
    outcome: RunOutcome,
    group_failed: bool,
}

impl std::fmt::Debug for Run<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Run")
            .field("state", &self.state)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl Run<'_> {
    /// Current state
    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Results produced so far
    #[must_use]
    pub const fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    /// Consume the run, returning its results
    #[must_use]
    pub fn into_outcome(self) -> RunOutcome {
        self.outcome
    }

    /// Advance by one transition
    ///
    /// Terminal states are absorbing: stepping them is a no-op.
    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<&EngineState, EngineError> {
        match self.state {
            EngineState::Pending => {
                trace!("run started with {} rule(s)", self.engine.rules.len());
                if self.engine.rules.is_empty() {
                    self.finish(reporter);
                } else {
                    self.state = EngineState::Running { next: 0 };
                }
            },
            EngineState::Running { next } => self.evaluate_rule(next, reporter)?,
            EngineState::Succeeded | EngineState::Failed { .. } => {},
        }
        Ok(&self.state)
    }

    fn evaluate_rule(&mut self, index: usize, reporter: &mut dyn Reporter) -> Result<(), EngineError> {
        let engine = self.engine;
        let rules = &engine.rules;
        let rule = &rules[index];
        self.load(rule.artifact)?;
        let artifact = &self.artifacts[&rule.artifact];

        let verdict = evaluator::evaluate(&rule.predicate, artifact);
        let result = match &verdict {
            Verdict::Pass => EvaluationResult {
                rule: rule.id.clone(),
                group: rule.group.clone(),
                outcome: Outcome::Pass,
                message: rule.success_message.clone(),
            },
            Verdict::Fail { detail } => EvaluationResult {
                rule: rule.id.clone(),
                group: rule.group.clone(),
                outcome: Outcome::Fail,
                message: self.failure_message(rule, artifact, detail.as_deref()),
            },
        };
        debug!("rule {} on {}: {:?}", rule.id, rule.artifact, result.outcome);

        let group_ends = rules.get(index + 1).is_none_or(|next| next.group != rule.group);
        let passed = result.passed();
        if !passed {
            reporter.rule_failed(&result);
            self.group_failed = true;
        }
        self.outcome.results.push(result);

        if !passed && engine.policy == EvaluationPolicy::FailFast {
            self.finish(reporter);
            return Ok(());
        }

        if group_ends {
            if !self.group_failed {
                reporter.group_passed(&rule.group, &rule.success_message);
            }
            self.group_failed = false;
        }

        if index + 1 == rules.len() {
            self.finish(reporter);
        } else {
            self.state = EngineState::Running { next: index + 1 };
        }
        Ok(())
    }

    fn failure_message(&self, rule: &Rule, artifact: &Artifact, detail: Option<&str>) -> String {
        match (&rule.predicate, artifact) {
            (Predicate::FileExists, Artifact::Absent) => {
                rule.render_failure(Some(&self.source.describe(rule.artifact)))
            },
            (_, Artifact::Absent) => format!("{} artifact unavailable", rule.artifact),
            _ => rule.render_failure(detail),
        }
    }

    fn load(&mut self, name: ArtifactName) -> Result<(), EngineError> {
        if !self.artifacts.contains_key(&name) {
            let artifact = self.source.read(name)?;
            debug!("resolved {name}: present={}", artifact.is_present());
            self.artifacts.insert(name, artifact);
        }
        Ok(())
    }

    fn finish(&mut self, reporter: &mut dyn Reporter) {
        self.state = match self.outcome.failures().next() {
            Some(failed) => EngineState::Failed {
                rule: failed.rule.clone(),
            },
            None => EngineState::Succeeded,
        };
        reporter.finished(&self.outcome);
    }
}

fn validate(rules: &[Rule]) -> Result<(), RuleError> {
    let mut ids = HashSet::new();
    let mut closed_groups = HashSet::new();
    let mut current: Option<&Rule> = None;

    for rule in rules {
        if !ids.insert(rule.id.as_str()) {
            return Err(RuleError::DuplicateId(rule.id.clone()));
        }
        match current {
            Some(prev) if prev.group == rule.group => {
                if prev.success_message != rule.success_message {
                    return Err(RuleError::InconsistentGroup(rule.group.clone()));
                }
            },
            Some(prev) => {
                closed_groups.insert(prev.group.as_str());
                if closed_groups.contains(rule.group.as_str()) {
                    return Err(RuleError::InconsistentGroup(rule.group.clone()));
                }
            },
            None => {},
        }
        current = Some(rule);
    }
    Ok(())
}
