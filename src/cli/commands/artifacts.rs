//! Show artifact resolution

use std::path::Path;

use archcheck::core::ports::{ArtifactSource, ResolveError};
use archcheck::exit::ExitStatus;
use archcheck::output::{ArtifactInfo, ArtifactListResult, OutputMode};

use super::open_project;

/// Print where every artifact resolves and whether it exists
///
/// Presence is decided by reading, so an unreadable artifact fails here as it
/// would in `check`.
pub fn artifacts(root: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitStatus> {
    let source = open_project(root)?;

    let artifacts = source
        .refs()
        .into_iter()
        .map(|r| {
            Ok(ArtifactInfo {
                name: r.name.to_string(),
                path: source.describe(r.name),
                present: source.read(r.name)?.is_present(),
            })
        })
        .collect::<Result<Vec<_>, ResolveError>>()?;

    ArtifactListResult {
        root: source.root().display().to_string(),
        artifacts,
    }
    .render(mode);
    Ok(ExitStatus::Success)
}
