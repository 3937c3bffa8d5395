//! Business logic services
//!
//! Pure evaluation logic over domain models. The only I/O happens behind the
//! [`ArtifactSource`](crate::core::ports::ArtifactSource) port.
//!
//! - [`evaluator`] - One pure function per predicate kind
//! - [`topology`] - Shallow `key:` scanner for the deployment descriptor
//! - [`engine`] - Ordered, fail-fast rule evaluation

pub mod engine;
pub mod evaluator;
pub mod topology;

pub use engine::{ConformanceEngine, EngineError, EngineState, EvaluationPolicy, Run};
pub use evaluator::evaluate;
