//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for bundle generation.
///
/// Every field is optional in the YAML; command-line flags override the
/// corresponding values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider used when `generate` is run without `--provider`.
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Directory the bundle is written to when `--output` is not given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Iteration ceiling baked into `ralph.sh` as its default argument.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Seconds `ralph.sh` sleeps between iterations.
    #[serde(default = "default_iteration_pause_seconds")]
    pub iteration_pause_seconds: u32,

    /// Documents copied into `scripts/ralph/` (relative paths resolve
    /// against the config file's directory).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_docs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            output_dir: default_output_dir(),
            max_iterations: default_max_iterations(),
            iteration_pause_seconds: default_iteration_pause_seconds(),
            reference_docs: Vec::new(),
        }
    }
}
