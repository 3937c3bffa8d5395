//! Rule model
//!
//! A rule binds one artifact to one predicate. Rules are immutable once built;
//! the ordered list of rules is the whole policy.

use thiserror::Error;

use super::{ArtifactName, Predicate};

/// Placeholder replaced by the evaluator's detail when rendering a failure
pub const DETAIL_PLACEHOLDER: &str = "{detail}";

/// Errors raised while building rules
#[derive(Debug, Error)]
pub enum RuleError {
    /// The regex parameter does not compile
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error
        source: regex::Error,
    },

    /// A substring or key set was empty, or contained an empty entry
    #[error("parameter set must be non-empty and contain no empty entries")]
    EmptyParameters,

    /// Two rules share the same id
    #[error("duplicate rule id: {0}")]
    DuplicateId(String),

    /// Rules of one group are not contiguous, or disagree on the success message
    #[error("rule group {0} must be contiguous and share one success message")]
    InconsistentGroup(String),
}

/// An architectural invariant
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier, e.g. `service-no-threads`
    pub id: String,

    /// Group this rule reports under
    pub group: String,

    /// Artifact the predicate inspects
    pub artifact: ArtifactName,

    /// What must hold
    pub predicate: Predicate,

    /// Message on failure; may contain `{detail}`
    pub failure_message: String,

    /// Message printed once the whole group has passed
    pub success_message: String,
}

impl Rule {
    /// Create a rule
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: ArtifactName,
        predicate: Predicate,
        failure_message: impl Into<String>,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            artifact,
            predicate,
            failure_message: failure_message.into(),
            success_message: success_message.into(),
        }
    }

    /// Render the failure message with an optional detail
    #[must_use]
    pub fn render_failure(&self, detail: Option<&str>) -> String {
        if self.failure_message.contains(DETAIL_PLACEHOLDER) {
            self.failure_message.replace(DETAIL_PLACEHOLDER, detail.unwrap_or("?"))
        } else {
            self.failure_message.clone()
        }
    }
}
