//! ralph-bundle: turns a short project brief into a Ralph agent-loop bundle.
//!
//! The pipeline has three stages, each a pure function:
//!
//! 1. [`story`] parses free-text features into user stories.
//! 2. [`manifest`] assembles the stories into a PRD manifest and validates it.
//! 3. [`render`] turns an accepted manifest into `prd.json`, `prompt.md` and
//!    `ralph.sh`.
//!
//! [`bundle`] lays the rendered text out as a directory tree and writes it.

pub mod bundle;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod story;
