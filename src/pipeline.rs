//! End-to-end generation: brief -> manifest -> validation -> rendered bundle.

use crate::error::{BundleError, Result};
use crate::manifest::{AcceptedManifest, build_manifest};
use crate::provider::ProviderId;
use crate::render::{RenderOptions, RenderedBundle, render_with};

/// The input record produced by whatever collects the brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBrief {
    pub project_name: String,
    pub description: String,
    /// Feature lines in priority order; blank lines are discarded.
    pub features: Vec<String>,
    pub provider: ProviderId,
}

/// A validated manifest and its rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBundle {
    pub manifest: AcceptedManifest,
    pub rendered: RenderedBundle,
}

/// Run the whole pipeline.
///
/// # Errors
///
/// - [`BundleError::InputIncomplete`] if every feature is blank
/// - [`BundleError::SchemaViolation`] with every violation if the manifest is invalid
pub fn generate(brief: &ProjectBrief, options: &RenderOptions) -> Result<GeneratedBundle> {
    if brief.features.iter().all(|f| f.trim().is_empty()) {
        return Err(BundleError::InputIncomplete);
    }

    let manifest = build_manifest(
        &brief.project_name,
        &brief.description,
        &brief.features[..],
        brief.provider,
    );

    let manifest = manifest.accept().map_err(BundleError::SchemaViolation)?;
    let rendered = render_with(&manifest, options)?;

    tracing::info!(
        project = %manifest.project,
        branch = %manifest.branch_name,
        stories = manifest.user_stories.len(),
        provider = %manifest.llm_provider,
        "generated bundle"
    );

    Ok(GeneratedBundle { manifest, rendered })
}
