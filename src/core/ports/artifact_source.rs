//! Artifact source port
//!
//! Defines the interface for reading artifact text.

use std::path::PathBuf;

use thiserror::Error;

use super::super::models::{Artifact, ArtifactName};

/// Infrastructure failures while resolving artifacts
///
/// These are never rule violations: a missing file is reported as
/// [`Artifact::Absent`], not as an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No root marker was found walking up from the start directory
    #[error("project root not found above {0} (looked for {1})")]
    RootNotFound(PathBuf, String),

    /// The explicit root is missing or not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The file exists but could not be read
    #[error("cannot read {name} artifact at {path}: {source}")]
    Io {
        /// Logical artifact
        name: ArtifactName,
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("{name} artifact at {path} is not valid UTF-8")]
    Encoding {
        /// Logical artifact
        name: ArtifactName,
        /// File that failed
        path: PathBuf,
    },
}

/// Source of artifact text
///
/// Implementations must be side-effect-free: reading never mutates the
/// filesystem.
pub trait ArtifactSource {
    /// Read one artifact
    ///
    /// Returns [`Artifact::Absent`] when the artifact does not exist and an
    /// error for every other failure.
    fn read(&self, name: ArtifactName) -> Result<Artifact, ResolveError>;

    /// Human-readable location of an artifact, used in messages
    fn describe(&self, name: ArtifactName) -> String {
        name.to_string()
    }
}
