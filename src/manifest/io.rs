//! Manifest serialization to and from `prd.json`.

use super::Manifest;
use crate::error::{BundleError, Result};
use std::path::Path;

impl Manifest {
    /// Serialize to pretty-printed JSON (two-space indent, fixed key order).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BundleError::UserError(format!("failed to serialize manifest to JSON: {}", e))
        })
    }

    /// Parse a manifest from JSON.
    ///
    /// Missing string and list fields load as empty so that validation can
    /// report them; a missing or unknown `llmProvider` is a parse error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BundleError::UserError(format!("failed to parse manifest JSON: {}", e)))
    }

    /// Load a manifest from a `prd.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BundleError::UserError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
