//! Project configuration
//!
//! An optional `.archcheck.toml` at the project root overrides where each
//! artifact lives:
//!
//! ```toml
//! [artifacts]
//! service = "app/api.py"
//! compose = "deploy/docker-compose.yml"
//! ```
//!
//! Without the file, the built-in layout is used.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{ArtifactLayout, ArtifactName};
use crate::paths;

/// Errors loading `.archcheck.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Parser error
        source: toml::de::Error,
    },

    /// An `[artifacts]` entry names no known artifact
    #[error("{0}")]
    UnknownArtifact(String),

    /// An `[artifacts]` entry has an empty path
    #[error("empty path for artifact {0}")]
    EmptyPath(String),
}

/// A `.archcheck.toml` file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Artifact path overrides, keyed by logical name
    #[serde(default)]
    pub artifacts: BTreeMap<String, PathBuf>,
}

impl ProjectConfig {
    /// Load `.archcheck.toml` from `root`, or defaults if there is none
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.is_file() {
            debug!("no {} under {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Parse configuration from a string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(paths::CONFIG_FILE),
            source,
        })
    }

    /// Artifact layout with the overrides applied
    pub fn layout(&self) -> Result<ArtifactLayout, ConfigError> {
        let mut layout = ArtifactLayout::default();
        for (key, path) in &self.artifacts {
            let name: ArtifactName = key.parse().map_err(ConfigError::UnknownArtifact)?;
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath(key.clone()));
            }
            debug!("artifact {name} overridden to {}", path.display());
            layout = layout.with_path(name, path);
        }
        Ok(layout)
    }
}
