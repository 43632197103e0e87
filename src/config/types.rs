//! Configuration constants and defaults.

use crate::provider::ProviderId;
use crate::render::{DEFAULT_MAX_ITERATIONS, DEFAULT_PAUSE_SECONDS};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ralph-bundle.yaml";

// Default value functions for serde
pub(crate) fn default_provider() -> String {
    ProviderId::ALL[0].as_str().to_string()
}
pub(crate) fn default_output_dir() -> String {
    ".".to_string()
}
pub(crate) fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}
pub(crate) fn default_iteration_pause_seconds() -> u32 {
    DEFAULT_PAUSE_SECONDS
}
