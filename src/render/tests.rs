//! Tests for bundle rendering.

use super::*;
use crate::bundle::layout;
use crate::manifest::{AcceptedManifest, Manifest, build_manifest};
use crate::provider::{CommandFamily, ProviderId, ProviderProfile, profile};

// =========================================================================
// Helper functions
// =========================================================================

fn accepted(provider: ProviderId) -> AcceptedManifest {
    build_manifest(
        "My Cool App!",
        "Track habits with streaks",
        &["Add login form", "Add API endpoint for export"],
        provider,
    )
    .accept()
    .unwrap()
}

fn custom_profile(command: &str) -> ProviderProfile {
    ProviderProfile {
        id: ProviderId::Claude45,
        display_name: "Local Llama".to_string(),
        family: CommandFamily::Custom(command.to_string()),
        model_id: "llama3".to_string(),
        description: "Local model".to_string(),
        max_tokens: 8000,
    }
}

// =========================================================================
// Manifest serialization
// =========================================================================

#[test]
fn test_manifest_text_round_trips() {
    let manifest = accepted(ProviderId::Gpt4o);
    let rendered = render(&manifest).unwrap();

    let parsed = Manifest::from_json(&rendered.manifest_json).unwrap();
    assert_eq!(parsed, *manifest);
}

#[test]
fn test_render_is_deterministic() {
    let manifest = accepted(ProviderId::Claude45);
    assert_eq!(render(&manifest).unwrap(), render(&manifest).unwrap());
}

// =========================================================================
// Prompt
// =========================================================================

#[test]
fn test_prompt_interpolates_brief_and_provider() {
    let manifest = accepted(ProviderId::ClaudeSonnet);
    let prompt = render(&manifest).unwrap().prompt_md;

    assert!(prompt.contains("working on the \"My Cool App!\" project"));
    assert!(prompt.contains("## Project Goal\nTrack habits with streaks\n"));
    assert!(prompt.contains("configured to use **Claude Sonnet 4**"));
}

#[test]
fn test_prompt_references_bundle_paths_and_sentinel() {
    let prompt = render(&accepted(ProviderId::Claude45)).unwrap().prompt_md;

    assert!(prompt.contains("`scripts/ralph/prd.json`"));
    assert!(prompt.contains("`progress.txt`"));
    assert!(prompt.contains(&format!("reply with:\n{}\n", COMPLETION_SENTINEL)));
}

#[test]
fn test_prompt_structure_is_provider_independent() {
    let headings = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|l| l.starts_with("## "))
            .map(str::to_string)
            .collect()
    };

    let claude = render(&accepted(ProviderId::Claude45)).unwrap().prompt_md;
    let gpt = render(&accepted(ProviderId::Gpt4Turbo)).unwrap().prompt_md;

    assert_eq!(headings(&claude), headings(&gpt));
    assert_eq!(
        claude.replace("Claude Opus 4.5", "GPT-4 Turbo"),
        gpt,
        "only the provider name differs"
    );
}

// =========================================================================
// Invocation command
// =========================================================================

#[test]
fn test_anthropic_invocation() {
    assert_eq!(
        invocation_command(profile(ProviderId::Claude45)),
        "anthropic messages create --model claude-opus-4-5-20251101 --max-tokens 8192 -f \"$SCRIPT_DIR/prompt.md\""
    );
}

#[test]
fn test_openai_invocation() {
    assert_eq!(
        invocation_command(profile(ProviderId::Gpt4o)),
        "openai api chat.completions.create --model gpt-4o --max-tokens 8192 -f \"$SCRIPT_DIR/prompt.md\""
    );
}

#[test]
fn test_custom_family_invocation() {
    assert_eq!(
        invocation_command(&custom_profile("ollama")),
        "ollama --model llama3 -f \"$SCRIPT_DIR/prompt.md\""
    );
}

#[test]
fn test_invocation_caps_tokens_at_profile_budget() {
    let mut small = profile(ProviderId::Claude45).clone();
    small.max_tokens = 4096;
    assert!(invocation_command(&small).contains("--max-tokens 4096 "));
}

#[test]
fn test_invocation_quotes_unsafe_model_ids() {
    let mut odd = custom_profile("runner");
    odd.model_id = "my model; rm".to_string();
    assert_eq!(
        invocation_command(&odd),
        "runner --model 'my model; rm' -f \"$SCRIPT_DIR/prompt.md\""
    );
}

#[test]
fn test_invocation_splits_into_expected_words() {
    let words = shell_words::split(&invocation_command(profile(ProviderId::Gpt4Turbo))).unwrap();
    assert_eq!(
        words,
        vec![
            "openai",
            "api",
            "chat.completions.create",
            "--model",
            "gpt-4-turbo",
            "--max-tokens",
            "8192",
            "-f",
            "$SCRIPT_DIR/prompt.md",
        ]
    );
}

// =========================================================================
// Script text
// =========================================================================

#[test]
fn test_script_embeds_provider_and_command() {
    let script = render(&accepted(ProviderId::Gpt4o)).unwrap().script_sh;

    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("# Provider: GPT-4o\n"));
    assert!(script.contains("echo \"Provider: GPT-4o\""));
    assert!(script.contains(&format!(
        "OUTPUT=$({} 2>&1 | tee /dev/stderr) || true",
        invocation_command(profile(ProviderId::Gpt4o))
    )));
}

#[test]
fn test_script_shell_syntax_survives_templating() {
    let script = render(&accepted(ProviderId::Claude45)).unwrap().script_sh;

    assert!(script.contains("MAX_ITERATIONS=${1:-10}\n"));
    assert!(script.contains("\"${BASH_SOURCE[0]}\""));
    assert!(script.contains("read_branch() {\n"));
    assert!(script.contains("sleep 2\n"));
    assert!(script.contains("sed 's|^ralph/||'"));
    assert!(!script.contains("{{"));
}

#[test]
fn test_script_scans_for_the_prompt_sentinel() {
    let rendered = render(&accepted(ProviderId::Claude45)).unwrap();

    assert!(
        rendered
            .script_sh
            .contains(&format!("grep -qF \"{}\"", COMPLETION_SENTINEL))
    );
    assert!(rendered.prompt_md.contains(COMPLETION_SENTINEL));
}

#[test]
fn test_script_uses_bundle_paths() {
    let script = render(&accepted(ProviderId::Claude45)).unwrap().script_sh;

    assert!(script.contains(&format!("PRD_FILE=\"$SCRIPT_DIR/{}\"", layout::MANIFEST_FILE)));
    assert!(script.contains("PROGRESS_FILE=\"$(cd \"$SCRIPT_DIR/../..\" && pwd)/progress.txt\""));
    assert!(script.contains(&format!("echo \"{}\" > \"$PROGRESS_FILE\"", layout::PROGRESS_HEADER)));
}

#[test]
fn test_script_respects_render_options() {
    let options = RenderOptions {
        default_max_iterations: 25,
        pause_seconds: 0,
    };
    let rendered = render_with(&accepted(ProviderId::Claude45), &options).unwrap();

    assert!(rendered.script_sh.contains("MAX_ITERATIONS=${1:-25}\n"));
    assert!(rendered.script_sh.contains("sleep 0\n"));
}

#[test]
fn test_every_artifact_names_the_manifest_provider() {
    for id in ProviderId::ALL {
        let manifest = accepted(id);
        let rendered = render_with(&manifest, &RenderOptions::default()).unwrap();
        let expected = profile(id);

        assert!(
            rendered
                .manifest_json
                .contains(&format!("\"llmProvider\": \"{}\"", id.as_str()))
        );
        assert!(
            rendered
                .prompt_md
                .contains(&format!("configured to use **{}**", expected.display_name))
        );
        assert!(rendered.script_sh.contains(&invocation_command(expected)));

        for other in ProviderId::ALL.into_iter().filter(|o| *o != id) {
            let other_name = &profile(other).display_name;
            assert!(!rendered.prompt_md.contains(other_name.as_str()), "{} in {} prompt", other_name, id);
            assert!(!rendered.script_sh.contains(&format!("--model {} ", profile(other).model_id)));
        }
    }
}

// =========================================================================
// Script behaviour
// =========================================================================

#[cfg(unix)]
mod script_runs {
    use super::*;
    use crate::bundle::{BundleFiles, write_bundle};
    use chrono::Utc;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::TempDir;

    /// A fake provider CLI that counts its invocations and prints the
    /// sentinel on call number `complete_on` (never if 0).
    fn install_fake_provider(dir: &Path, complete_on: u32) -> String {
        let path = dir.join("fake-llm");
        let body = format!(
            r#"#!/bin/bash
COUNT_FILE="$(dirname "$0")/calls"
n=$(( $(cat "$COUNT_FILE" 2>/dev/null || echo 0) + 1 ))
echo "$n" > "$COUNT_FILE"
echo "working on iteration $n"
if [ "{complete_on}" -ne 0 ] && [ "$n" -ge "{complete_on}" ]; then
  echo "all done {sentinel}"
fi
"#,
            complete_on = complete_on,
            sentinel = COMPLETION_SENTINEL,
        );
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    fn write_test_bundle(root: &Path, fake: &str, project: &str) {
        let manifest = build_manifest(project, "desc", &["Add login form"], ProviderId::Claude45)
            .accept()
            .unwrap();
        let options = RenderOptions {
            default_max_iterations: 10,
            pause_seconds: 0,
        };
        let rendered = render_for_profile(&manifest, &custom_profile(fake), &options).unwrap();
        let files = BundleFiles::assemble(&rendered, project, Utc::now(), &[]);
        write_bundle(root, &files, true).unwrap();
    }

    fn run_script(root: &Path, args: &[&str]) -> Output {
        Command::new("bash")
            .arg(root.join(layout::script_path()))
            .args(args)
            .current_dir(root)
            .output()
            .unwrap()
    }

    fn calls(fake_dir: &Path) -> u32 {
        fs::read_to_string(fake_dir.join("calls"))
            .map(|s| s.trim().parse().unwrap())
            .unwrap_or(0)
    }

    #[test]
    fn test_stops_at_first_sentinel() {
        let bundle = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let fake = install_fake_provider(bin.path(), 3);
        write_test_bundle(bundle.path(), &fake, "Habit Tracker");

        let output = run_script(bundle.path(), &["10"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(calls(bin.path()), 3);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Completed at iteration 3 of 10"));
        assert!(!stdout.contains("Ralph Iteration 4 of 10"));
    }

    #[test]
    fn test_exhausts_ceiling_without_sentinel() {
        let bundle = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let fake = install_fake_provider(bin.path(), 0);
        write_test_bundle(bundle.path(), &fake, "Habit Tracker");

        let output = run_script(bundle.path(), &["2"]);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(calls(bin.path()), 2);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("reached max iterations (2)"));
    }

    #[test]
    fn test_rejects_invalid_ceiling() {
        let bundle = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let fake = install_fake_provider(bin.path(), 1);
        write_test_bundle(bundle.path(), &fake, "Habit Tracker");

        for bad in ["0", "-3", "ten"] {
            let output = run_script(bundle.path(), &[bad]);
            assert_eq!(output.status.code(), Some(2), "ceiling {:?}", bad);
        }
        assert_eq!(calls(bin.path()), 0);
    }

    #[test]
    fn test_records_branch_and_keeps_seeded_progress() {
        let bundle = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let fake = install_fake_provider(bin.path(), 1);
        write_test_bundle(bundle.path(), &fake, "Habit Tracker");

        let output = run_script(bundle.path(), &[]);
        assert_eq!(output.status.code(), Some(0));

        let script_dir = bundle.path().join(layout::SCRIPT_DIR);
        let last_branch = fs::read_to_string(script_dir.join(layout::LAST_BRANCH_FILE)).unwrap();
        assert_eq!(last_branch.trim(), "ralph/habit-tracker");
        assert!(script_dir.join(layout::LAST_MANIFEST_FILE).exists());

        let progress = fs::read_to_string(bundle.path().join(layout::PROGRESS_FILE)).unwrap();
        assert!(progress.contains("Project: Habit Tracker"));
        assert!(!script_dir.join(layout::ARCHIVE_DIR).exists());
    }

    #[test]
    fn test_archives_previous_run_on_branch_change() {
        let bundle = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let fake = install_fake_provider(bin.path(), 1);

        write_test_bundle(bundle.path(), &fake, "Old Project");
        assert_eq!(run_script(bundle.path(), &[]).status.code(), Some(0));

        let progress_path = bundle.path().join(layout::PROGRESS_FILE);
        fs::write(&progress_path, "notes from the old run\n").unwrap();

        write_test_bundle(bundle.path(), &fake, "New Project");
        assert_eq!(run_script(bundle.path(), &[]).status.code(), Some(0));

        let archive_root = bundle.path().join(layout::SCRIPT_DIR).join(layout::ARCHIVE_DIR);
        let folders: Vec<_> = fs::read_dir(&archive_root)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(folders.len(), 1);

        let folder = &folders[0];
        let name = folder.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.ends_with("-old-project"), "archive folder {}", name);

        let archived_prd = fs::read_to_string(folder.join(layout::MANIFEST_FILE)).unwrap();
        assert!(archived_prd.contains("\"branchName\": \"ralph/old-project\""));
        let archived_progress = fs::read_to_string(folder.join(layout::PROGRESS_FILE)).unwrap();
        assert_eq!(archived_progress, "notes from the old run\n");

        let fresh_progress = fs::read_to_string(&progress_path).unwrap();
        assert!(fresh_progress.starts_with(layout::PROGRESS_HEADER));
        assert!(!fresh_progress.contains("notes from the old run"));

        let last_branch = fs::read_to_string(
            bundle.path().join(layout::SCRIPT_DIR).join(layout::LAST_BRANCH_FILE),
        )
        .unwrap();
        assert_eq!(last_branch.trim(), "ralph/new-project");
    }
}
