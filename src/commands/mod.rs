//! Command implementations for ralph-bundle.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Handlers take the working directory explicitly so they
//! can be exercised against temporary directories in tests.

mod generate;
mod init;
mod providers;
mod validate_cmd;

use crate::cli::{Cli, Command};
use ralph_bundle::error::{BundleError, Result};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = current_dir()?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(args, config_path, &cwd),
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Providers => providers::cmd_providers(config_path, &cwd),
        Command::Init => init::cmd_init(&cwd),
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        BundleError::IoError(format!("failed to determine current directory: {}", e))
    })
}
