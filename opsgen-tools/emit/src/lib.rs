//! Artifact Emission
//!
//! Writes generated artifacts into an output directory and verifies that
//! a directory is still in sync with what the generator produces. The
//! check path is what CI runs to catch hand edits to generated files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use opsgen::GeneratedArtifact;

/// Highest order emitted when none is requested.
pub const DEFAULT_MAX_ORDER: i32 = 20;

/// Filesystem path of one artifact inside `out_dir`.
pub fn artifact_path(out_dir: &Path, artifact: &GeneratedArtifact) -> PathBuf {
    out_dir.join(format!("{}.cs", artifact.key))
}

/// Writes every artifact into `out_dir`, creating the directory if
/// needed. Returns the number of files written.
pub fn write_artifacts(out_dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    for artifact in artifacts {
        let path = artifact_path(out_dir, artifact);
        debug!("writing {}", path.display());
        fs::write(&path, &artifact.text)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    info!("Wrote {} artifacts to {}", artifacts.len(), out_dir.display());
    Ok(artifacts.len())
}

/// Compares `out_dir` against `artifacts` and returns the keys whose
/// file is missing or whose content differs.
pub fn check_artifacts(out_dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<Vec<String>> {
    let mut stale = Vec::new();
    for artifact in artifacts {
        let path = artifact_path(out_dir, artifact);
        match fs::read_to_string(&path) {
            Ok(content) if content == artifact.text => {}
            Ok(_) => {
                debug!("content drift in {}", path.display());
                stale.push(artifact.key.clone());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("missing {}", path.display());
                stale.push(artifact.key.clone());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read file: {}", path.display()));
            }
        }
    }
    Ok(stale)
}
