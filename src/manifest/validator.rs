//! Manifest invariant checks.
//!
//! Every invariant is evaluated independently; the report lists every
//! violation rather than stopping at the first one.

use super::{BRANCH_PREFIX, Manifest};
use crate::story::TYPECHECK_CRITERION;
use regex::Regex;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

/// `US-` followed by a zero-padded number of at least three digits.
static STORY_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^US-[0-9]{3,}$").expect("Invalid story ID regex"));

/// A single violated manifest invariant.
///
/// Story positions are 1-based, matching how the operator sees the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Project name is empty after trimming.
    MissingProjectName,
    /// Branch identifier is empty or lacks the `ralph/` prefix.
    InvalidBranchName { branch: String },
    /// The manifest has no stories.
    NoStories,
    /// A story identifier does not match `US-###`.
    InvalidStoryId { story: usize, id: String },
    /// A story title is empty after trimming.
    MissingStoryTitle { story: usize },
    /// A story has no acceptance criteria.
    NoAcceptanceCriteria { story: usize },
    /// A story lacks the mandatory typecheck criterion.
    MissingTypecheckCriterion { story: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingProjectName => write!(f, "Project name is required"),
            Violation::InvalidBranchName { .. } => {
                write!(f, "Branch name must start with \"{}\"", BRANCH_PREFIX)
            }
            Violation::NoStories => write!(f, "At least one user story is required"),
            Violation::InvalidStoryId { story, .. } => {
                write!(f, "Story {}: ID must follow pattern US-XXX", story)
            }
            Violation::MissingStoryTitle { story } => {
                write!(f, "Story {}: Title is required", story)
            }
            Violation::NoAcceptanceCriteria { story } => {
                write!(
                    f,
                    "Story {}: At least one acceptance criterion is required",
                    story
                )
            }
            Violation::MissingTypecheckCriterion { story } => {
                write!(
                    f,
                    "Story {}: Must include \"{}\" criterion",
                    story, TYPECHECK_CRITERION
                )
            }
        }
    }
}

/// Result of validating a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether every invariant holds.
    pub accepted: bool,
    /// Violations found (empty if accepted).
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            accepted: violations.is_empty(),
            violations,
        }
    }

    /// Human-readable messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Check a manifest against every invariant.
///
/// Pure and idempotent: the same manifest always yields the same report.
pub fn validate(manifest: &Manifest) -> ValidationReport {
    let mut violations = Vec::new();

    if manifest.project.trim().is_empty() {
        violations.push(Violation::MissingProjectName);
    }

    if manifest.branch_name.is_empty() || !manifest.branch_name.starts_with(BRANCH_PREFIX) {
        violations.push(Violation::InvalidBranchName {
            branch: manifest.branch_name.clone(),
        });
    }

    if manifest.user_stories.is_empty() {
        violations.push(Violation::NoStories);
    }

    for (i, story) in manifest.user_stories.iter().enumerate() {
        let position = i + 1;

        if !STORY_ID_PATTERN.is_match(&story.id) {
            violations.push(Violation::InvalidStoryId {
                story: position,
                id: story.id.clone(),
            });
        }
        if story.title.trim().is_empty() {
            violations.push(Violation::MissingStoryTitle { story: position });
        }
        if story.acceptance_criteria.is_empty() {
            violations.push(Violation::NoAcceptanceCriteria { story: position });
        }
        if !story
            .acceptance_criteria
            .iter()
            .any(|c| c == TYPECHECK_CRITERION)
        {
            violations.push(Violation::MissingTypecheckCriterion { story: position });
        }
    }

    ValidationReport::from_violations(violations)
}

/// A manifest that passed validation.
///
/// Can only be obtained through [`Manifest::accept`], so holding one proves
/// every invariant held at validation time. Read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedManifest(Manifest);

impl AcceptedManifest {
    /// Give back the inner manifest.
    pub fn into_inner(self) -> Manifest {
        self.0
    }
}

impl Deref for AcceptedManifest {
    type Target = Manifest;

    fn deref(&self) -> &Manifest {
        &self.0
    }
}

impl Manifest {
    /// Validate and, if every invariant holds, accept the manifest.
    ///
    /// On failure, returns every violation found.
    pub fn accept(self) -> Result<AcceptedManifest, Vec<Violation>> {
        let report = validate(&self);
        if report.accepted {
            Ok(AcceptedManifest(self))
        } else {
            Err(report.violations)
        }
    }
}
