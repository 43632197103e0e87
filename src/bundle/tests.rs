//! Tests for bundle assembly and writing.

use super::*;
use crate::manifest::build_manifest;
use crate::provider::ProviderId;
use crate::render::render;
use chrono::TimeZone;
use std::fs;
use tempfile::TempDir;

// =========================================================================
// Helper functions
// =========================================================================

fn started() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
}

fn rendered() -> RenderedBundle {
    let manifest = build_manifest(
        "Habit Tracker",
        "Track habits",
        &["Add login form"],
        ProviderId::Claude45,
    )
    .accept()
    .unwrap();
    render(&manifest).unwrap()
}

fn assembled(docs: &[ReferenceDoc]) -> BundleFiles {
    BundleFiles::assemble(&rendered(), "Habit Tracker", started(), docs)
}

// =========================================================================
// Assembly
// =========================================================================

#[test]
fn test_assemble_lays_out_fixed_paths() {
    let bundle = assembled(&[]);

    let paths: Vec<&str> = bundle.files.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "progress.txt",
            "scripts/ralph/prd.json",
            "scripts/ralph/prompt.md",
            "scripts/ralph/ralph.sh",
        ]
    );
    assert_eq!(bundle.empty_dirs, vec!["tasks".to_string()]);
}

#[test]
fn test_assemble_carries_rendered_text_unchanged() {
    let rendered = rendered();
    let bundle = BundleFiles::assemble(&rendered, "Habit Tracker", started(), &[]);

    assert_eq!(bundle.get("scripts/ralph/prd.json"), Some(rendered.manifest_json.as_str()));
    assert_eq!(bundle.get("scripts/ralph/prompt.md"), Some(rendered.prompt_md.as_str()));
    assert_eq!(bundle.get("scripts/ralph/ralph.sh"), Some(rendered.script_sh.as_str()));
    assert_eq!(bundle.get("missing.txt"), None);
}

#[test]
fn test_progress_seed_format() {
    assert_eq!(
        progress_seed("Habit Tracker", started()),
        "# Ralph Progress Log\n\
         Project: Habit Tracker\n\
         Started: 2026-01-15T09:30:00Z\n\
         ---\n\
         \n\
         Ready for Ralph execution. Run `./scripts/ralph/ralph.sh` to begin.\n"
    );
}

#[test]
fn test_assemble_is_deterministic_for_fixed_timestamp() {
    assert_eq!(assembled(&[]), assembled(&[]));
}

#[test]
fn test_reference_docs_land_in_script_dir() {
    let doc = ReferenceDoc::new("AGENTS.md", "# Agent notes\n").unwrap();
    let bundle = assembled(&[doc]);

    assert_eq!(bundle.get("scripts/ralph/AGENTS.md"), Some("# Agent notes\n"));
}

#[test]
fn test_reference_doc_never_shadows_bundle_file() {
    let doc = ReferenceDoc::new("prompt.md", "not the real prompt").unwrap();
    let bundle = assembled(&[doc]);

    assert_ne!(bundle.get("scripts/ralph/prompt.md"), Some("not the real prompt"));
    assert_eq!(bundle.files.len(), 4);
}

#[test]
fn test_reference_doc_name_must_be_plain() {
    for bad in ["", ".", "..", "docs/AGENTS.md", "..\\evil.md"] {
        let err = ReferenceDoc::new(bad, "x").unwrap_err();
        assert!(matches!(err, BundleError::UserError(_)), "name {:?}", bad);
    }
}

#[test]
fn test_reference_doc_name_cannot_shadow_run_state() {
    for reserved in [".last-branch", ".last-prd.json", "archive"] {
        let err = ReferenceDoc::new(reserved, "x").unwrap_err();
        assert!(err.to_string().contains("reserved"), "name {:?}", reserved);
    }
    assert!(ReferenceDoc::new("archive.md", "x").is_ok());
}

#[test]
fn test_reference_doc_load_rejects_reserved_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".last-branch");
    fs::write(&path, "ralph/hijacked").unwrap();

    let err = ReferenceDoc::load(&path).unwrap_err();
    assert!(matches!(err, BundleError::UserError(_)));
}

#[test]
fn test_reference_doc_load_keeps_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CLAUDE.md");
    fs::write(&path, "guidance").unwrap();

    let doc = ReferenceDoc::load(&path).unwrap();
    assert_eq!(doc.name, "CLAUDE.md");
    assert_eq!(doc.content, "guidance");
}

#[test]
fn test_reference_doc_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ReferenceDoc::load(temp_dir.path().join("nope.md")).unwrap_err();
    assert!(matches!(err, BundleError::UserError(_)));
}

// =========================================================================
// Writing
// =========================================================================

#[test]
fn test_write_bundle_creates_every_file_and_dir() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = assembled(&[]);

    let summary = write_bundle(temp_dir.path(), &bundle, false).unwrap();

    assert_eq!(summary.written.len(), 4);
    assert!(summary.kept.is_empty());
    for (relative, content) in &bundle.files {
        assert_eq!(&fs::read_to_string(temp_dir.path().join(relative)).unwrap(), content);
    }
    assert!(temp_dir.path().join("tasks").is_dir());
}

#[test]
fn test_write_bundle_refuses_to_replace_without_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = assembled(&[]);
    write_bundle(temp_dir.path(), &bundle, false).unwrap();

    let err = write_bundle(temp_dir.path(), &bundle, false).unwrap_err();
    assert!(matches!(err, BundleError::UserError(_)));
    assert!(err.to_string().contains("--force"));
}

#[test]
fn test_write_bundle_overwrite_keeps_progress_log() {
    let temp_dir = TempDir::new().unwrap();
    write_bundle(temp_dir.path(), &assembled(&[]), false).unwrap();

    let progress = temp_dir.path().join(layout::PROGRESS_FILE);
    fs::write(&progress, "hard-won learnings\n").unwrap();

    let summary = write_bundle(temp_dir.path(), &assembled(&[]), true).unwrap();

    assert_eq!(summary.kept, vec![progress.clone()]);
    assert_eq!(summary.written.len(), 3);
    assert_eq!(fs::read_to_string(&progress).unwrap(), "hard-won learnings\n");
}

#[cfg(unix)]
#[test]
fn test_write_bundle_marks_script_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    write_bundle(temp_dir.path(), &assembled(&[]), false).unwrap();

    let mode = fs::metadata(temp_dir.path().join(layout::script_path()))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111);
}
