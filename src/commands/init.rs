//! Implementation of the `ralph-bundle init` command.
//!
//! Writes a `ralph-bundle.yaml` with every default spelled out. The command
//! is idempotent: an existing config is never overwritten.

use ralph_bundle::config::{Config, DEFAULT_CONFIG_FILE};
use ralph_bundle::error::Result;
use ralph_bundle::fs::atomic_write_file;
use std::path::Path;

const CONFIG_HEADER: &str = "\
# ralph-bundle configuration
# Command-line flags override these values.
#
# default_provider: CLAUDE_4_5 | CLAUDE_SONNET | GPT_4O | GPT_4_TURBO
# reference_docs: files copied into scripts/ralph/ (relative to this file)

";

/// Execute the `ralph-bundle init` command.
pub fn cmd_init(cwd: &Path) -> Result<()> {
    let path = cwd.join(DEFAULT_CONFIG_FILE);
    if init_at(cwd)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists; leaving it unchanged", path.display());
    }
    Ok(())
}

/// Write the default config into `dir`. Returns `false` if one already exists.
pub fn init_at(dir: &Path) -> Result<bool> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.exists() {
        return Ok(false);
    }

    let content = format!("{}{}", CONFIG_HEADER, Config::default().to_yaml()?);
    atomic_write_file(&path, &content)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}
