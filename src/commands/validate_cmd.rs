//! Implementation of the `ralph-bundle validate` command.
//!
//! Loads a `prd.json` and checks it against every manifest invariant. All
//! violations are reported at once so they can be fixed in one pass.

use crate::cli::ValidateArgs;
use ralph_bundle::error::{BundleError, Result};
use ralph_bundle::manifest::{Manifest, validate};

/// Execute the `ralph-bundle validate` command.
///
/// # Exit Codes
///
/// - 0: The manifest is valid
/// - 1: The file could not be read or parsed
/// - 2: One or more invariants failed
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let report = validate(&manifest);

    if !report.accepted {
        tracing::debug!(
            path = %args.manifest.display(),
            violations = report.violations.len(),
            "manifest rejected"
        );
        return Err(BundleError::SchemaViolation(report.violations));
    }

    println!("{}", format_accepted(&manifest));
    Ok(())
}

fn format_accepted(manifest: &Manifest) -> String {
    let passing = manifest.user_stories.iter().filter(|s| s.passes).count();
    format!(
        "Manifest OK: {} ({})\n  Stories: {} ({} passing)\n  Provider: {}",
        manifest.project,
        manifest.branch_name,
        manifest.user_stories.len(),
        passing,
        manifest.llm_provider
    )
}
