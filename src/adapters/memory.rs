//! In-memory artifact source
//!
//! Holds artifact text directly. Useful for embedding the checker and for
//! tests that should not touch the filesystem.

use std::collections::BTreeMap;

use crate::core::models::{Artifact, ArtifactName};
use crate::core::ports::{ArtifactSource, ResolveError};

/// Artifact text keyed by logical name; missing names are absent
///
/// Messages name artifacts by their default path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArtifactSource {
    files: BTreeMap<ArtifactName, String>,
}

impl MemoryArtifactSource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of an artifact
    #[must_use]
    pub fn with(mut self, name: ArtifactName, text: impl Into<String>) -> Self {
        self.files.insert(name, text.into());
        self
    }

    /// Remove an artifact
    #[must_use]
    pub fn without(mut self, name: ArtifactName) -> Self {
        self.files.remove(&name);
        self
    }

    /// Replace the text of an artifact through a closure
    #[must_use]
    pub fn edit(mut self, name: ArtifactName, f: impl FnOnce(&str) -> String) -> Self {
        if let Some(text) = self.files.get_mut(&name) {
            *text = f(text);
        }
        self
    }
}

impl ArtifactSource for MemoryArtifactSource {
    fn read(&self, name: ArtifactName) -> Result<Artifact, ResolveError> {
        Ok(self.files.get(&name).map_or(Artifact::Absent, |text| Artifact::Present(text.clone())))
    }

    fn describe(&self, name: ArtifactName) -> String {
        name.default_path().to_string()
    }
}
