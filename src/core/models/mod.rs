//! Domain models for archcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Artifact`] - A text file that is inspected, never executed
//! - [`Rule`] - "This artifact must satisfy this predicate"
//! - [`Predicate`] - The closed set of checks a rule can apply
//! - [`RunOutcome`] - Ordered results of one run

mod artifact;
mod outcome;
mod predicate;
mod rule;

pub use artifact::{Artifact, ArtifactLayout, ArtifactName, ArtifactRef};
pub use outcome::{EvaluationResult, Outcome, RunOutcome, RunStatus, Verdict};
pub use predicate::{Predicate, PredicateKind};
pub use rule::{DETAIL_PLACEHOLDER, Rule, RuleError};
