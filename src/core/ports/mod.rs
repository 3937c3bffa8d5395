//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the conformance engine and the
//! outside world (filesystem, output streams).
//!
//! Implementations live in the `adapters` and `output` modules.

mod artifact_source;
mod reporter;

pub use artifact_source::{ArtifactSource, ResolveError};
pub use reporter::{Reporter, SilentReporter};
