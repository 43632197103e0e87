//! PRD manifest model, builder and validator.
//!
//! The manifest is serialized as `prd.json`:
//!
//! ```text
//! {
//!   "project": "My Cool App",
//!   "branchName": "ralph/my-cool-app",
//!   "description": "...",
//!   "userStories": [ { "id": "US-001", ... } ],
//!   "llmProvider": "CLAUDE_4_5"
//! }
//! ```
//!
//! A freshly built [`Manifest`] may be invalid. Only [`validate`] can turn it
//! into an [`AcceptedManifest`], which is what the renderer consumes.

mod builder;
mod io;
mod validator;


pub use builder::{branch_name, build_manifest, slugify};
pub use validator::{AcceptedManifest, ValidationReport, Violation, validate};

use crate::provider::ProviderId;
use crate::story::UserStory;
use serde::{Deserialize, Serialize};

/// Namespace every branch identifier starts with.
pub const BRANCH_PREFIX: &str = "ralph/";

/// The structured record driving the agent loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Project display name.
    #[serde(default)]
    pub project: String,

    /// Namespaced, slugified project name (e.g., "ralph/my-cool-app").
    #[serde(default)]
    pub branch_name: String,

    /// Free-text project description.
    #[serde(default)]
    pub description: String,

    /// Stories in priority order.
    #[serde(default)]
    pub user_stories: Vec<UserStory>,

    /// Selected model provider.
    pub llm_provider: ProviderId,
}
