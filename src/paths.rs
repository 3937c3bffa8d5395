//! Centralized path definitions for archcheck
//!
//! This module provides the root markers and the project-root discovery
//! strategy. Artifact paths are relative to the discovered root.
//!
//! ## Project Layout
//!
//! ```text
//! repo/                          # Project root (first directory with a marker)
//! ├── .archcheck.toml            # Optional: artifact path overrides
//! ├── pyproject.toml
//! ├── docker-compose.yml         # compose
//! └── src/cryptoinvest/
//!     ├── service.py             # service
//!     ├── worker.py              # worker
//!     ├── store.py               # store
//!     └── snapshot.py            # snapshot
//! ```

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::ports::ResolveError;

/// Project configuration filename
pub const CONFIG_FILE: &str = ".archcheck.toml";

/// Files or directories that mark a project root, checked in this order in
/// every directory
pub const ROOT_MARKERS: [&str; 4] = [CONFIG_FILE, "pyproject.toml", "docker-compose.yml", ".git"];

/// Path to `.archcheck.toml` under `root`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Marker present directly in `dir`, if any
#[must_use]
pub fn root_marker(dir: &Path) -> Option<&'static str> {
    ROOT_MARKERS.into_iter().find(|marker| dir.join(marker).exists())
}

/// Find the project root by walking up from `from`
///
/// Returns the first directory, starting at `from` itself, that contains a
/// root marker. A file path starts the walk at its parent.
pub fn find_project_root(from: &Path) -> Result<PathBuf, ResolveError> {
    let mut current = if from.is_file() {
        from.parent().unwrap_or(from).to_path_buf()
    } else {
        from.to_path_buf()
    };

    loop {
        if let Some(marker) = root_marker(&current) {
            debug!("project root {} (marker {marker})", current.display());
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(ResolveError::RootNotFound(from.to_path_buf(), ROOT_MARKERS.join(", ")));
            },
        }
    }
}
