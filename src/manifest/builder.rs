//! Manifest construction from a project brief.

use super::{BRANCH_PREFIX, Manifest};
use crate::provider::ProviderId;
use crate::story::parse_feature;

/// Assemble a manifest from the brief.
///
/// Blank features are dropped; the remaining ones keep their input order as
/// priority order. No validation happens here, so an empty feature list
/// yields a manifest with no stories.
pub fn build_manifest<S: AsRef<str>>(
    project_name: &str,
    description: &str,
    features: &[S],
    provider: ProviderId,
) -> Manifest {
    let user_stories = features
        .iter()
        .map(|feature| feature.as_ref())
        .filter(|feature| !feature.trim().is_empty())
        .enumerate()
        .map(|(index, feature)| parse_feature(feature, index))
        .collect();

    Manifest {
        project: project_name.to_string(),
        branch_name: branch_name(project_name),
        description: description.to_string(),
        user_stories,
        llm_provider: provider,
    }
}

/// Derive the namespaced branch identifier for a project name.
///
/// Format: `ralph/{slug}`. Example: `"My Cool App!"` -> `ralph/my-cool-app`.
pub fn branch_name(project_name: &str) -> String {
    format!("{}{}", BRANCH_PREFIX, slugify(project_name))
}

/// Kebab-case a project name.
///
/// Lowercases, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// turns whitespace runs into `-`, collapses repeated hyphens, and trims
/// hyphens from both ends.
pub fn slugify(name: &str) -> String {
    let mut result = String::new();
    let mut last_was_hyphen = true; // Start true to avoid leading hyphen

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            last_was_hyphen = false;
        } else if (is_separator(c) || c == '-') && !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    while result.ends_with('-') {
        result.pop();
    }

    result
}

/// Whitespace as a `\s` class sees it: Unicode whitespace plus the BOM.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
