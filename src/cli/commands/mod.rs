//! Command implementations

mod artifacts;
mod check;
mod rules;

use std::path::{Path, PathBuf};

use archcheck::adapters::file::FsArtifactSource;
use archcheck::config::ProjectConfig;
use archcheck::paths;

pub use artifacts::artifacts;
pub use check::{CheckOptions, check};
pub use rules::rules;

/// Open the project at `root`, or at the root found above the working directory
///
/// Applies `.archcheck.toml` overrides when the root has one.
fn open_project(root: Option<&Path>) -> anyhow::Result<FsArtifactSource> {
    let root: PathBuf = match root {
        Some(root) => root.to_path_buf(),
        None => paths::find_project_root(&std::env::current_dir()?)?,
    };
    let layout = ProjectConfig::load(&root)?.layout()?;
    Ok(FsArtifactSource::new(root, layout)?)
}
