//! Configuration model for ralph-bundle.
//!
//! This module defines the Config struct that represents `ralph-bundle.yaml`.
//! Unknown YAML fields are ignored, optional fields fall back to defaults, and
//! values are validated after parsing.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
