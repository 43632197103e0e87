//! Bundle rendering.
//!
//! Turns an [`AcceptedManifest`] into the three text artifacts of a bundle:
//!
//! - `prd.json` - the manifest serialization
//! - `prompt.md` - agent instructions
//! - `ralph.sh` - the driver loop
//!
//! Rendering is pure: the same manifest, profile and options always produce
//! the same text. The prompt and the script share [`COMPLETION_SENTINEL`] and
//! the bundle paths from [`crate::bundle::layout`].

mod prompt;
mod script;
mod template;

#[cfg(test)]
mod tests;

pub use prompt::render_prompt;
pub use script::{RESPONSE_MAX_TOKENS, invocation_command, render_script};
pub use template::{TemplateError, render_template, vars};

use crate::error::Result;
use crate::manifest::AcceptedManifest;
use crate::provider::{self, ProviderProfile};

/// Marker the agent prints when every story passes; `ralph.sh` scans for it.
pub const COMPLETION_SENTINEL: &str = "<promise>COMPLETE</promise>";

/// Iteration ceiling used when `ralph.sh` is run without an argument.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Seconds `ralph.sh` waits between iterations.
pub const DEFAULT_PAUSE_SECONDS: u32 = 2;

/// Knobs baked into the driver script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Ceiling used when the script is run without an argument.
    pub default_max_iterations: u32,
    /// Pause between iterations, in seconds.
    pub pause_seconds: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            pause_seconds: DEFAULT_PAUSE_SECONDS,
        }
    }
}

/// The three rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBundle {
    /// `prd.json` contents.
    pub manifest_json: String,
    /// `prompt.md` contents.
    pub prompt_md: String,
    /// `ralph.sh` contents.
    pub script_sh: String,
}

/// Render with default options.
pub fn render(manifest: &AcceptedManifest) -> Result<RenderedBundle> {
    render_with(manifest, &RenderOptions::default())
}

/// Render with explicit options.
///
/// The prompt and script always use the catalog profile of the manifest's
/// `llmProvider`, so all three artifacts name the same provider.
pub fn render_with(manifest: &AcceptedManifest, options: &RenderOptions) -> Result<RenderedBundle> {
    render_for_profile(manifest, provider::profile(manifest.llm_provider), options)
}

/// Render against an arbitrary profile. Crate-internal: outside callers go
/// through [`render_with`], which keeps the profile tied to the manifest.
pub(crate) fn render_for_profile(
    manifest: &AcceptedManifest,
    profile: &ProviderProfile,
    options: &RenderOptions,
) -> Result<RenderedBundle> {
    let rendered = RenderedBundle {
        manifest_json: manifest.to_json()?,
        prompt_md: render_prompt(manifest, profile)?,
        script_sh: render_script(profile, options)?,
    };

    tracing::debug!(
        project = %manifest.project,
        provider = %profile.display_name,
        "rendered bundle"
    );

    Ok(rendered)
}
