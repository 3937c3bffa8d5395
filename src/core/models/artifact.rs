//! Artifact model
//!
//! An artifact is a text file the checker reads but never executes. The set of
//! logical artifacts is closed; each one maps to a path relative to the project
//! root through an [`ArtifactLayout`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical artifact names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactName {
    /// The stateless API service module
    Service,
    /// The signal worker module
    Worker,
    /// The persistence-layer module
    Store,
    /// The snapshot normalization module
    Snapshot,
    /// The deployment descriptor
    Compose,
}

impl ArtifactName {
    /// Every artifact, in resolution order
    pub const ALL: [Self; 5] = [Self::Service, Self::Worker, Self::Store, Self::Snapshot, Self::Compose];

    /// Lowercase name as used in config files and messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Worker => "worker",
            Self::Store => "store",
            Self::Snapshot => "snapshot",
            Self::Compose => "compose",
        }
    }

    /// Built-in path relative to the project root
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Service => "src/cryptoinvest/service.py",
            Self::Worker => "src/cryptoinvest/worker.py",
            Self::Store => "src/cryptoinvest/store.py",
            Self::Snapshot => "src/cryptoinvest/snapshot.py",
            Self::Compose => "docker-compose.yml",
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                format!("Unknown artifact: {s}. Use: service, worker, store, snapshot, compose")
            })
    }
}

/// A logical artifact bound to a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    /// Logical name
    pub name: ArtifactName,
    /// Absolute path (project root joined with the relative path)
    pub path: PathBuf,
}

/// Content produced for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// The file exists and was read in full
    Present(String),
    /// The file does not exist
    Absent,
}

impl Artifact {
    /// Text content, if present
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent => None,
        }
    }

    /// Whether the artifact was found
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Relative path for every logical artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    paths: BTreeMap<ArtifactName, PathBuf>,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        let paths = ArtifactName::ALL
            .into_iter()
            .map(|name| (name, PathBuf::from(name.default_path())))
            .collect();
        Self { paths }
    }
}

impl ArtifactLayout {
    /// Replace the relative path of one artifact
    #[must_use]
    pub fn with_path(mut self, name: ArtifactName, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(name, path.into());
        self
    }

    /// Relative path of an artifact
    #[must_use]
    pub fn relative_path(&self, name: ArtifactName) -> &Path {
        self.paths.get(&name).map_or_else(|| Path::new(name.default_path()), PathBuf::as_path)
    }

    /// Bind every artifact to an absolute path under `root`
    #[must_use]
    pub fn refs(&self, root: &Path) -> Vec<ArtifactRef> {
        ArtifactName::ALL
            .into_iter()
            .map(|name| ArtifactRef {
                name,
                path: root.join(self.relative_path(name)),
            })
            .collect()
    }
}
