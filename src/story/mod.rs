//! Feature-text parsing into user stories.
//!
//! Each non-blank feature line from the brief becomes one [`UserStory`]:
//!
//! ```text
//! "- Add login form"  ->  US-001 "Add login form"
//!                         criteria: implementation, typecheck, browser check
//! ```
//!
//! Parsing is total: any string yields a well-formed story, even if the
//! cleaned text is empty.

mod criteria;


pub use criteria::{
    API_CRITERION, BROWSER_CRITERION, DATA_CRITERION, ERROR_CRITERION, GENERIC_CRITERION,
    TEST_CRITERION, TYPECHECK_CRITERION, UI_KEYWORDS, VALIDATION_CRITERION,
    acceptance_criteria, is_ui_feature,
};

use serde::{Deserialize, Serialize};

/// Prefix of every story identifier.
pub const STORY_ID_PREFIX: &str = "US-";

/// Titles longer than this many words are truncated.
const MAX_TITLE_WORDS: usize = 6;

/// A single unit of implementable scope.
///
/// Field names serialize in camelCase to match the `prd.json` schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    /// Story identifier (e.g., "US-001").
    #[serde(default)]
    pub id: String,

    /// Short title derived from the feature text.
    #[serde(default)]
    pub title: String,

    /// Narrative "As a user, I want ..." sentence.
    #[serde(default)]
    pub description: String,

    /// Ordered acceptance criteria.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    /// 1-based priority, equal to the story's position in the brief.
    #[serde(default)]
    pub priority: u32,

    /// Whether the agent loop has completed this story.
    #[serde(default)]
    pub passes: bool,

    /// Free-form notes left by the agent loop.
    #[serde(default)]
    pub notes: String,
}

/// Parse one feature line into a user story.
///
/// `index` is the zero-based position among the non-blank features; blank
/// features must be filtered out by the caller.
pub fn parse_feature(raw: &str, index: usize) -> UserStory {
    let clean = clean_feature(raw);
    let is_ui = is_ui_feature(&clean);

    let story = UserStory {
        id: story_id(index),
        title: derive_title(&clean),
        description: format!(
            "As a user, I want {} so that the application meets my needs.",
            clean.to_lowercase()
        ),
        acceptance_criteria: acceptance_criteria(&clean, is_ui),
        priority: (index + 1) as u32,
        passes: false,
        notes: String::new(),
    };

    tracing::debug!(
        id = %story.id,
        ui = is_ui,
        criteria = story.acceptance_criteria.len(),
        "parsed feature"
    );
    if story.title.trim().is_empty() {
        tracing::warn!(id = %story.id, "feature text is empty after cleaning");
    }

    story
}

/// Generate the story identifier for a zero-based index.
///
/// Format: `US-{n:03}` where `n = index + 1`. Indices past 998 widen the
/// number rather than wrapping.
pub fn story_id(index: usize) -> String {
    format!("{}{:03}", STORY_ID_PREFIX, index + 1)
}

/// Strip surrounding whitespace and a leading list marker (`-`, `*`, `•`).
pub(crate) fn clean_feature(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_prefix(['-', '*', '•'])
        .unwrap_or(trimmed);
    stripped.trim().to_string()
}

/// Derive a title: the text itself if short, otherwise the first words plus `...`.
pub(crate) fn derive_title(clean: &str) -> String {
    let words: Vec<&str> = clean.split_whitespace().collect();
    if words.len() <= MAX_TITLE_WORDS {
        clean.to_string()
    } else {
        format!("{}...", words[..MAX_TITLE_WORDS].join(" "))
    }
}
