//! Run the conformance rules against the project

use std::path::Path;

use log::debug;

use archcheck::core::policy;
use archcheck::core::ports::Reporter;
use archcheck::core::services::EvaluationPolicy;
use archcheck::exit::ExitStatus;
use archcheck::output::{JsonReporter, LineReporter, OutputMode};

use super::open_project;

/// Options for a check run
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions<'a> {
    /// Explicit project root
    pub root: Option<&'a Path>,
    /// Evaluate every rule instead of stopping at the first failure
    pub all: bool,
}

/// Evaluate the policy and report as rules pass
pub fn check(opts: &CheckOptions<'_>, mode: OutputMode) -> anyhow::Result<ExitStatus> {
    let source = open_project(opts.root)?;
    debug!("checking project at {}", source.root().display());

    let policy = if opts.all {
        EvaluationPolicy::CollectAll
    } else {
        EvaluationPolicy::FailFast
    };
    let engine = policy::default_engine()?.with_policy(policy);

    let mut reporter: Box<dyn Reporter> = match mode {
        OutputMode::Human => Box::new(LineReporter::stdout().summarize_failures(opts.all)),
        OutputMode::Json => Box::new(JsonReporter::stdout()),
    };

    let outcome = engine.run(&source, reporter.as_mut())?;
    Ok(ExitStatus::from(&outcome))
}
