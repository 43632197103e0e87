//! Keyword-driven acceptance criteria.
//!
//! Rules are ordered predicate lists over a lowercased copy of the feature
//! text. Every rule fires independently and criteria are never deduplicated.

/// Criterion every story must carry.
pub const TYPECHECK_CRITERION: &str = "npm run typecheck passes";

pub const API_CRITERION: &str = "API endpoint responds with correct data structure";
pub const VALIDATION_CRITERION: &str = "Input validation handles edge cases correctly";
pub const ERROR_CRITERION: &str = "Error states are handled gracefully";
pub const DATA_CRITERION: &str = "Data model matches expected schema";

/// Added when no keyword rule fired.
pub const GENERIC_CRITERION: &str = "Feature implementation matches specification";

/// Added for non-UI logic/util/service features.
pub const TEST_CRITERION: &str = "npm test passes";

/// Added for UI features.
pub const BROWSER_CRITERION: &str = "Verify in browser using dev-browser skill";

/// Substrings that mark a feature as UI-related.
pub const UI_KEYWORDS: &[&str] = &[
    "ui",
    "interface",
    "button",
    "form",
    "page",
    "view",
    "component",
    "display",
    "screen",
    "modal",
    "dialog",
    "input",
    "select",
    "dropdown",
    "layout",
    "navigation",
    "menu",
    "header",
    "footer",
    "sidebar",
];

/// Keyword rules in the order their criteria are appended.
const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["api", "endpoint"], API_CRITERION),
    (&["validation", "validate"], VALIDATION_CRITERION),
    (&["error", "handle"], ERROR_CRITERION),
    (&["data", "model"], DATA_CRITERION),
];

const TESTABLE_KEYWORDS: &[&str] = &["logic", "util", "service"];

/// Whether the feature text mentions any UI keyword (case-insensitive substring match).
pub fn is_ui_feature(feature: &str) -> bool {
    contains_any(&feature.to_lowercase(), UI_KEYWORDS)
}

/// Derive the ordered acceptance criteria for a cleaned feature.
pub fn acceptance_criteria(feature: &str, is_ui: bool) -> Vec<String> {
    let lower = feature.to_lowercase();

    let mut criteria: Vec<String> = KEYWORD_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&lower, keywords))
        .map(|(_, criterion)| criterion.to_string())
        .collect();

    if criteria.is_empty() {
        criteria.push(GENERIC_CRITERION.to_string());
    }

    criteria.push(TYPECHECK_CRITERION.to_string());

    if !is_ui && contains_any(&lower, TESTABLE_KEYWORDS) {
        criteria.push(TEST_CRITERION.to_string());
    }

    if is_ui {
        criteria.push(BROWSER_CRITERION.to_string());
    }

    criteria
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
