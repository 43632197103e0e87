//! CLI argument parsing for ralph-bundle.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ralph-bundle: turn a project brief into a Ralph agent-loop bundle.
///
/// A bundle is a PRD manifest (prd.json), agent instructions (prompt.md)
/// and a driver script (ralph.sh) that runs an AI coding agent in a loop
/// until every user story passes.
#[derive(Parser, Debug)]
#[command(name = "ralph-bundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./ralph-bundle.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ralph-bundle.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a bundle from a project brief.
    ///
    /// Each feature becomes one user story, in the order given.
    Generate(GenerateArgs),

    /// Check an existing prd.json and report every problem.
    Validate(ValidateArgs),

    /// List the available model providers.
    Providers,

    /// Write a default ralph-bundle.yaml in the current directory.
    ///
    /// Leaves an existing file untouched.
    Init,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Project name (also determines the branch name).
    #[arg(short, long)]
    pub name: String,

    /// One-paragraph project description.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Feature description; repeat for several features.
    #[arg(short, long = "feature", value_name = "TEXT")]
    pub features: Vec<String>,

    /// File with one feature per line, appended after --feature values.
    #[arg(long, value_name = "PATH")]
    pub features_file: Option<PathBuf>,

    /// Provider identifier (e.g. CLAUDE_4_5, gpt-4o).
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Directory to write the bundle into.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Replace an existing bundle in the output directory.
    #[arg(long)]
    pub force: bool,

    /// Print the artifacts instead of writing files.
    #[arg(long, conflicts_with_all = ["output", "force"])]
    pub stdout: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to a prd.json manifest.
    pub manifest: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
