//! Filesystem artifact source
//!
//! Implements `ArtifactSource` by reading files under a project root. Reads
//! never create or modify anything.
//!
//! # Examples
//!
//! ```no_run
//! use archcheck::adapters::file::FsArtifactSource;
//! use archcheck::core::models::{ArtifactLayout, ArtifactName};
//! use archcheck::core::ports::ArtifactSource;
//!
//! let source = FsArtifactSource::discover(".", ArtifactLayout::default()).unwrap();
//! let service = source.read(ArtifactName::Service).unwrap();
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::trace;

use crate::core::models::{Artifact, ArtifactLayout, ArtifactName, ArtifactRef};
use crate::core::ports::{ArtifactSource, ResolveError};
use crate::paths;

/// Reads artifacts from disk
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    root: PathBuf,
    layout: ArtifactLayout,
}

impl FsArtifactSource {
    /// Create a source rooted at an explicit directory
    pub fn new(root: impl AsRef<Path>, layout: ArtifactLayout) -> Result<Self, ResolveError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ResolveError::NotADirectory(root));
        }
        Ok(Self { root, layout })
    }

    /// Create a source at the project root found above `from`
    pub fn discover(from: impl AsRef<Path>, layout: ArtifactLayout) -> Result<Self, ResolveError> {
        let root = paths::find_project_root(from.as_ref())?;
        Ok(Self { root, layout })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the layout
    #[must_use]
    pub const fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Bind one artifact to its absolute path
    #[must_use]
    pub fn artifact_ref(&self, name: ArtifactName) -> ArtifactRef {
        ArtifactRef {
            name,
            path: self.root.join(self.layout.relative_path(name)),
        }
    }

    /// Every artifact bound to its absolute path
    #[must_use]
    pub fn refs(&self) -> Vec<ArtifactRef> {
        self.layout.refs(&self.root)
    }
}

impl ArtifactSource for FsArtifactSource {
    fn read(&self, name: ArtifactName) -> Result<Artifact, ResolveError> {
        let ArtifactRef { path, .. } = self.artifact_ref(name);
        trace!("reading {name} from {}", path.display());

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Artifact::Absent),
            Err(source) => return Err(ResolveError::Io { name, path, source }),
        };

        String::from_utf8(bytes)
            .map(Artifact::Present)
            .map_err(|_| ResolveError::Encoding { name, path })
    }

    fn describe(&self, name: ArtifactName) -> String {
        self.layout.relative_path(name).display().to_string()
    }
}
