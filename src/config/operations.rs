//! Config loading, validation, and lookup helpers.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{BundleError, Result};
use crate::provider::ProviderId;
use crate::render::RenderOptions;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BundleError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BundleError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BundleError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BundleError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `default_provider` must name a catalog provider
    /// - `max_iterations` must be positive
    /// - `reference_docs` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        if ProviderId::from_str(&self.default_provider).is_none() {
            return Err(BundleError::UserError(format!(
                "config validation failed: unknown default_provider '{}' (expected one of {})",
                self.default_provider,
                provider_names()
            )));
        }

        if self.max_iterations == 0 {
            return Err(BundleError::UserError(
                "config validation failed: max_iterations must be greater than 0".to_string(),
            ));
        }

        if self.reference_docs.iter().any(|d| d.trim().is_empty()) {
            return Err(BundleError::UserError(
                "config validation failed: reference_docs entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Find and load the config for a run.
    ///
    /// An explicit path must exist. Otherwise `ralph-bundle.yaml` in `cwd` is
    /// used when present, and defaults apply when it is not. Returns the
    /// config and the directory its relative paths resolve against.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, PathBuf)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            let base = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            tracing::debug!(path = %path.display(), "loaded config");
            return Ok((config, base));
        }

        let discovered = cwd.join(DEFAULT_CONFIG_FILE);
        if discovered.is_file() {
            let config = Self::load(&discovered)?;
            tracing::debug!(path = %discovered.display(), "loaded config");
            return Ok((config, cwd.to_path_buf()));
        }

        tracing::debug!("no config file found; using defaults");
        Ok((Self::default(), cwd.to_path_buf()))
    }

    /// The default provider. Only fails on a config that skipped [`Config::validate`].
    pub fn provider(&self) -> Result<ProviderId> {
        ProviderId::from_str(&self.default_provider).ok_or_else(|| {
            BundleError::UserError(format!(
                "unknown default_provider '{}'",
                self.default_provider
            ))
        })
    }

    /// Driver-script knobs taken from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            default_max_iterations: self.max_iterations,
            pause_seconds: self.iteration_pause_seconds,
        }
    }

    /// Reference document paths, with relative entries joined onto `base`.
    pub fn reference_doc_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.reference_docs
            .iter()
            .map(|doc| {
                let path = Path::new(doc);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base.join(path)
                }
            })
            .collect()
    }
}

fn provider_names() -> String {
    ProviderId::ALL
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
