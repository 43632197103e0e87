//! Implementation of the `ralph-bundle generate` command.
//!
//! # What `generate` does
//!
//! 1. Loads the config (flags override it)
//! 2. Collects features from `--feature` and `--features-file`
//! 3. Runs the pipeline: parse, build, validate, render
//! 4. Writes the bundle, or prints it with `--stdout`

use crate::cli::GenerateArgs;
use chrono::Utc;
use ralph_bundle::bundle::{self, BundleFiles, ReferenceDoc, WriteSummary, write_bundle};
use ralph_bundle::config::Config;
use ralph_bundle::error::{BundleError, Result};
use ralph_bundle::pipeline::{ProjectBrief, generate};
use ralph_bundle::provider::ProviderId;
use std::path::{Path, PathBuf};

/// Execute the `ralph-bundle generate` command.
///
/// # Exit Codes
///
/// - 0: Bundle generated
/// - 1: Bad arguments, unknown provider, or no features
/// - 2: The manifest failed validation
/// - 3: Writing the bundle failed
pub fn cmd_generate(args: GenerateArgs, config_path: Option<&Path>, cwd: &Path) -> Result<()> {
    let (config, base) = Config::resolve(config_path, cwd)?;

    let brief = ProjectBrief {
        project_name: args.name.clone(),
        description: args.description.clone(),
        features: collect_features(&args.features, args.features_file.as_deref(), cwd)?,
        provider: resolve_provider(args.provider.as_deref(), &config)?,
    };

    let generated = generate(&brief, &config.render_options())?;

    let reference_docs = config
        .reference_doc_paths(&base)
        .iter()
        .map(ReferenceDoc::load)
        .collect::<Result<Vec<_>>>()?;

    let files = BundleFiles::assemble(
        &generated.rendered,
        &generated.manifest.project,
        Utc::now(),
        &reference_docs,
    );

    if args.stdout {
        print!("{}", format_stdout(&files));
        return Ok(());
    }

    let output = output_dir(args.output.as_deref(), &config, &base, cwd);
    let summary = write_bundle(&output, &files, args.force)?;

    println!("{}", format_summary(&output, &generated.manifest.branch_name, &summary));
    Ok(())
}

/// Features from flags first, then the features file, one per line.
fn collect_features(
    flags: &[String],
    features_file: Option<&Path>,
    cwd: &Path,
) -> Result<Vec<String>> {
    let mut features = flags.to_vec();

    if let Some(path) = features_file {
        let path = cwd.join(path);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            BundleError::UserError(format!(
                "failed to read features file '{}': {}",
                path.display(),
                e
            ))
        })?;
        features.extend(content.lines().map(str::to_string));
    }

    Ok(features)
}

fn resolve_provider(flag: Option<&str>, config: &Config) -> Result<ProviderId> {
    match flag {
        Some(name) => ProviderId::from_str(name).ok_or_else(|| {
            BundleError::UserError(format!(
                "unknown provider '{}'; run `ralph-bundle providers` to list them",
                name
            ))
        }),
        None => config.provider(),
    }
}

fn output_dir(flag: Option<&Path>, config: &Config, base: &Path, cwd: &Path) -> PathBuf {
    match flag {
        Some(dir) => cwd.join(dir),
        None => base.join(&config.output_dir),
    }
}

/// Every bundle file with a header line, for piping.
fn format_stdout(files: &BundleFiles) -> String {
    let mut out = String::new();
    for (path, content) in &files.files {
        out.push_str(&format!("==> {} <==\n", path));
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn format_summary(output: &Path, branch: &str, summary: &WriteSummary) -> String {
    let mut out = format!("Bundle written to {}\n", output.display());
    out.push_str(&format!("  Branch: {}\n", branch));
    for path in &summary.written {
        out.push_str(&format!("  wrote  {}\n", display_relative(path, output)));
    }
    for path in &summary.kept {
        out.push_str(&format!("  kept   {}\n", display_relative(path, output)));
    }
    out.push_str(&format!(
        "\nNext: cd {} && ./{} [max_iterations]",
        output.display(),
        bundle::layout::script_path()
    ));
    out
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
