//! List the policy

use archcheck::core::policy;
use archcheck::exit::ExitStatus;
use archcheck::output::{OutputMode, RuleInfo, RuleListResult};

/// Print every rule in evaluation order
pub fn rules(mode: OutputMode) -> anyhow::Result<ExitStatus> {
    let rules = policy::default_rules()?
        .into_iter()
        .map(|r| RuleInfo {
            parameters: r.predicate.parameters(),
            predicate: r.predicate.kind().to_string(),
            artifact: r.artifact.to_string(),
            group: r.group,
            id: r.id,
        })
        .collect();

    RuleListResult { rules }.render(mode);
    Ok(ExitStatus::Success)
}
