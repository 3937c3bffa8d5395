//! Predicate evaluators
//!
//! One pure function per predicate kind. Nothing here touches the filesystem:
//! evaluators take artifact text and rule parameters and return a verdict.

use regex::Regex;

use super::topology;
use crate::core::models::{Artifact, Predicate, Verdict};

/// `FileExists`: the resolver produced content
#[must_use]
pub const fn file_exists(artifact: &Artifact) -> bool {
    artifact.is_present()
}

/// `ForbidsPattern`: the regex matches nowhere in `text`
#[must_use]
pub fn forbids_pattern(text: &str, pattern: &Regex) -> bool {
    !pattern.is_match(text)
}

/// `RequiresPattern`: the regex matches at least once
#[must_use]
pub fn requires_pattern(text: &str, pattern: &Regex) -> bool {
    pattern.is_match(text)
}

/// `RequiresAllSubstrings`: every literal appears single- or double-quoted
#[must_use]
pub fn requires_all_substrings(text: &str, substrings: &[String]) -> bool {
    first_missing_substring(text, substrings).is_none()
}

/// `DeclaresTopologyKeys`: every key is declared as a bare `key:` line
#[must_use]
pub fn declares_topology_keys(text: &str, keys: &[String]) -> bool {
    topology::first_undeclared(text, keys).is_none()
}

/// Whether `literal` appears in `text` wrapped in matching quotes
#[must_use]
pub fn contains_quoted(text: &str, literal: &str) -> bool {
    text.contains(&format!("\"{literal}\"")) || text.contains(&format!("'{literal}'"))
}

/// First substring, in declared order, that is not present quoted
#[must_use]
pub fn first_missing_substring<'s>(text: &str, substrings: &'s [String]) -> Option<&'s str> {
    substrings.iter().map(String::as_str).find(|s| !contains_quoted(text, s))
}

/// Location of the first match, as `line N: <trimmed line>`
#[must_use]
pub fn first_match_location(text: &str, pattern: &Regex) -> Option<String> {
    let found = pattern.find(text)?;
    let line_no = text[..found.start()].matches('\n').count() + 1;
    let line = text.lines().nth(line_no - 1).unwrap_or_default().trim();
    Some(format!("line {line_no}: {line}"))
}

/// Evaluate a predicate against a resolved artifact
///
/// Content predicates against an absent artifact fail without detail; the
/// engine reports those as an unavailable artifact.
#[must_use]
pub fn evaluate(predicate: &Predicate, artifact: &Artifact) -> Verdict {
    match predicate {
        Predicate::FileExists => file_exists(artifact).into(),
        Predicate::ForbidsPattern(re) => on_text(artifact, |text| {
            if forbids_pattern(text, re) {
                Verdict::Pass
            } else {
                Verdict::Fail {
                    detail: first_match_location(text, re),
                }
            }
        }),
        Predicate::RequiresPattern(re) => on_text(artifact, |text| requires_pattern(text, re).into()),
        Predicate::RequiresAllSubstrings(items) => on_text(artifact, |text| {
            if requires_all_substrings(text, items) {
                Verdict::Pass
            } else {
                Verdict::Fail {
                    detail: first_missing_substring(text, items).map(String::from),
                }
            }
        }),
        Predicate::DeclaresTopologyKeys(keys) => on_text(artifact, |text| {
            if declares_topology_keys(text, keys) {
                Verdict::Pass
            } else {
                Verdict::Fail {
                    detail: topology::first_undeclared(text, keys).map(String::from),
                }
            }
        }),
    }
}

fn on_text(artifact: &Artifact, check: impl FnOnce(&str) -> Verdict) -> Verdict {
    artifact.text().map_or(Verdict::Fail { detail: None }, check)
}
