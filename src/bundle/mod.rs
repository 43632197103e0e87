//! Bundle assembly and packaging.
//!
//! [`BundleFiles`] is the flat `path -> content` view of a rendered bundle
//! plus the empty directories it needs. [`write_bundle`] materializes it on
//! disk.

pub mod layout;
mod writer;

#[cfg(test)]
mod tests;

pub use writer::{WriteSummary, write_bundle};

use crate::error::{BundleError, Result};
use crate::render::RenderedBundle;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::path::Path;

/// A static document copied verbatim into the script directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDoc {
    /// File name (no directory components).
    pub name: String,
    /// Document contents.
    pub content: String,
}

impl ReferenceDoc {
    /// Create a reference document.
    ///
    /// Rejects names that are not plain file names and names `ralph.sh` uses
    /// for its own run state.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(BundleError::UserError(format!(
                "reference document name '{}' must be a plain file name",
                name
            )));
        }
        if layout::RUNTIME_ENTRIES.contains(&name.as_str()) {
            return Err(BundleError::UserError(format!(
                "reference document name '{}' is reserved for ralph.sh run state",
                name
            )));
        }
        Ok(Self {
            name,
            content: content.into(),
        })
    }

    /// Read a reference document from disk, keeping its file name.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                BundleError::UserError(format!(
                    "invalid reference document path '{}'",
                    path.display()
                ))
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            BundleError::UserError(format!(
                "failed to read reference document '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::new(name, content)
    }
}

/// Every file and directory of a bundle, keyed by bundle-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFiles {
    /// File contents keyed by forward-slash relative path.
    pub files: BTreeMap<String, String>,
    /// Directories that must exist even though they hold no files.
    pub empty_dirs: Vec<String>,
}

impl BundleFiles {
    /// Lay out a rendered bundle.
    ///
    /// `started` stamps the seeded progress log; it is passed in so the
    /// layout stays deterministic.
    pub fn assemble(
        rendered: &RenderedBundle,
        project: &str,
        started: DateTime<Utc>,
        reference_docs: &[ReferenceDoc],
    ) -> Self {
        let mut files = BTreeMap::new();

        files.insert(layout::script_path(), rendered.script_sh.clone());
        files.insert(layout::prompt_path(), rendered.prompt_md.clone());
        files.insert(layout::manifest_path(), rendered.manifest_json.clone());
        files.insert(
            layout::PROGRESS_FILE.to_string(),
            progress_seed(project, started),
        );

        // Reference docs never shadow the generated artifacts.
        for doc in reference_docs {
            let path = layout::in_script_dir(&doc.name);
            if files.contains_key(&path) {
                tracing::warn!(path = %path, "skipping reference document that collides with a bundle file");
                continue;
            }
            files.insert(path, doc.content.clone());
        }

        Self {
            files,
            empty_dirs: vec![layout::TASKS_DIR.to_string()],
        }
    }

    /// Contents of a file in the bundle.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

/// Initial contents of `progress.txt`.
pub fn progress_seed(project: &str, started: DateTime<Utc>) -> String {
    format!(
        "{}\nProject: {}\nStarted: {}\n---\n\nReady for Ralph execution. Run `./{}` to begin.\n",
        layout::PROGRESS_HEADER,
        project,
        started.to_rfc3339_opts(SecondsFormat::Secs, true),
        layout::script_path()
    )
}
