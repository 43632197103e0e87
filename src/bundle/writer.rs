//! Writing a bundle to a directory.

use super::{BundleFiles, layout};
use crate::error::{BundleError, Result};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};

/// What [`write_bundle`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Files written, as absolute or root-joined paths.
    pub written: Vec<PathBuf>,
    /// Existing files left untouched.
    pub kept: Vec<PathBuf>,
}

/// Write a bundle under `root`.
///
/// - Refuses to replace an existing `scripts/ralph/prd.json` unless
///   `overwrite` is set.
/// - Never replaces an existing `progress.txt`; `ralph.sh` archives it itself
///   when the branch changes.
/// - Marks `ralph.sh` executable on unix.
pub fn write_bundle(root: &Path, bundle: &BundleFiles, overwrite: bool) -> Result<WriteSummary> {
    let existing_manifest = root.join(layout::manifest_path());
    if existing_manifest.exists() && !overwrite {
        return Err(BundleError::UserError(format!(
            "'{}' already contains a bundle ({} exists); pass --force to overwrite it",
            root.display(),
            layout::manifest_path()
        )));
    }

    let mut summary = WriteSummary::default();

    for (relative, content) in &bundle.files {
        let target = root.join(relative);

        if relative == layout::PROGRESS_FILE && target.exists() {
            tracing::info!(path = %target.display(), "keeping existing progress log");
            summary.kept.push(target);
            continue;
        }

        atomic_write_file(&target, content)?;
        summary.written.push(target);
    }

    for dir in &bundle.empty_dirs {
        let target = root.join(dir);
        fs::create_dir_all(&target).map_err(|e| {
            BundleError::IoError(format!(
                "failed to create directory '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    make_executable(&root.join(layout::script_path()))?;

    tracing::info!(
        root = %root.display(),
        written = summary.written.len(),
        kept = summary.kept.len(),
        "wrote bundle"
    );

    Ok(summary)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if !path.exists() {
        return Ok(());
    }

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        BundleError::IoError(format!(
            "failed to mark '{}' executable: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
