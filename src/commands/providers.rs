//! Implementation of the `ralph-bundle providers` command.

use ralph_bundle::config::Config;
use ralph_bundle::error::Result;
use ralph_bundle::provider::{ProviderId, catalog};
use std::path::Path;

/// Execute the `ralph-bundle providers` command.
///
/// Lists the catalog and marks the provider `generate` uses by default.
pub fn cmd_providers(config_path: Option<&Path>, cwd: &Path) -> Result<()> {
    let (config, _) = Config::resolve(config_path, cwd)?;
    print!("{}", format_providers(config.provider()?));
    Ok(())
}

fn format_providers(default: ProviderId) -> String {
    let mut out = String::new();
    for (id, profile) in catalog() {
        let marker = if *id == default { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<14} {:<16} {:<9} {}\n",
            marker,
            id.as_str(),
            profile.display_name,
            profile.family.command(),
            profile.model_id
        ));
        out.push_str(&format!("    {}\n", profile.description));
    }
    out
}
