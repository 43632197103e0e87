//! Error types for ralph-bundle.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::manifest::Violation;
use crate::render::TemplateError;
use thiserror::Error;

/// Main error type for ralph-bundle operations.
///
/// Each variant maps to a specific exit code. Schema problems are carried as
/// the full violation list so the operator can fix everything in one pass.
#[derive(Error, Debug)]
pub enum BundleError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// No non-blank feature was supplied.
    #[error("At least one feature is required")]
    InputIncomplete,

    /// The manifest failed one or more invariants.
    #[error("Manifest validation failed:\n{}", format_violations(.0))]
    SchemaViolation(Vec<Violation>),

    /// A bundle template could not be rendered.
    #[error("Template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// Reading or writing bundle files failed.
    #[error("{0}")]
    IoError(String),
}

impl BundleError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundleError::UserError(_) => exit_codes::USER_ERROR,
            BundleError::InputIncomplete => exit_codes::USER_ERROR,
            BundleError::SchemaViolation(_) => exit_codes::VALIDATION_FAILURE,
            BundleError::Template(_) => exit_codes::USER_ERROR,
            BundleError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for ralph-bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
