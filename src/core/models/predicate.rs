//! Predicate kinds and their parameters
//!
//! The set of predicate kinds is closed. Regex parameters are compiled once,
//! when the predicate is built, so evaluation never fails.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use super::RuleError;

/// The closed set of predicate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PredicateKind {
    /// The artifact must exist
    FileExists,
    /// A regex must not match anywhere in the artifact
    ForbidsPattern,
    /// A regex must match at least once
    RequiresPattern,
    /// Every literal must appear quoted
    RequiresAllSubstrings,
    /// Every key must be declared as a bare `key:` line
    DeclaresTopologyKeys,
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileExists => "file-exists",
            Self::ForbidsPattern => "forbids-pattern",
            Self::RequiresPattern => "requires-pattern",
            Self::RequiresAllSubstrings => "requires-all-substrings",
            Self::DeclaresTopologyKeys => "declares-topology-keys",
        };
        f.write_str(name)
    }
}

/// A predicate kind together with the parameters it needs
#[derive(Debug, Clone)]
pub enum Predicate {
    /// See [`PredicateKind::FileExists`]
    FileExists,
    /// See [`PredicateKind::ForbidsPattern`]
    ForbidsPattern(Regex),
    /// See [`PredicateKind::RequiresPattern`]
    RequiresPattern(Regex),
    /// See [`PredicateKind::RequiresAllSubstrings`]
    RequiresAllSubstrings(Vec<String>),
    /// See [`PredicateKind::DeclaresTopologyKeys`]
    DeclaresTopologyKeys(Vec<String>),
}

impl Predicate {
    /// Build a `ForbidsPattern` predicate
    pub fn forbids(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::ForbidsPattern(compile(pattern)?))
    }

    /// Build a `RequiresPattern` predicate
    pub fn requires(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::RequiresPattern(compile(pattern)?))
    }

    /// Build a `RequiresAllSubstrings` predicate
    pub fn requires_all<I, S>(substrings: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::RequiresAllSubstrings(non_empty(substrings)?))
    }

    /// Build a `DeclaresTopologyKeys` predicate
    pub fn declares_keys<I, S>(keys: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::DeclaresTopologyKeys(non_empty(keys)?))
    }

    /// The kind of this predicate
    #[must_use]
    pub const fn kind(&self) -> PredicateKind {
        match self {
            Self::FileExists => PredicateKind::FileExists,
            Self::ForbidsPattern(_) => PredicateKind::ForbidsPattern,
            Self::RequiresPattern(_) => PredicateKind::RequiresPattern,
            Self::RequiresAllSubstrings(_) => PredicateKind::RequiresAllSubstrings,
            Self::DeclaresTopologyKeys(_) => PredicateKind::DeclaresTopologyKeys,
        }
    }

    /// Parameters rendered as strings, for listings
    #[must_use]
    pub fn parameters(&self) -> Vec<String> {
        match self {
            Self::FileExists => Vec::new(),
            Self::ForbidsPattern(re) | Self::RequiresPattern(re) => vec![re.as_str().to_string()],
            Self::RequiresAllSubstrings(items) | Self::DeclaresTopologyKeys(items) => items.clone(),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn non_empty<I, S>(items: I) -> Result<Vec<String>, RuleError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    if items.is_empty() || items.iter().any(String::is_empty) {
        return Err(RuleError::EmptyParameters);
    }
    Ok(items)
}
