//! `ralph.sh`: the bounded agent loop.
//!
//! Runtime states of the generated script:
//!
//! ```text
//! ARCHIVE-CHECK -> INIT-LOG -> ITERATE(1..N) -> SUCCESS   (sentinel seen, exit 0)
//!                                            -> EXHAUSTED (ceiling reached, exit 1)
//! ```
//!
//! A ceiling that is not a positive integer exits with status 2 before any
//! state is touched.

use super::template::{TemplateError, render_template, vars};
use super::{COMPLETION_SENTINEL, RenderOptions};
use crate::bundle::layout;
use crate::manifest::BRANCH_PREFIX;
use crate::provider::{CommandFamily, ProviderProfile};

/// Upper bound on response tokens requested from the provider CLI.
pub const RESPONSE_MAX_TOKENS: u32 = 8192;

// Literal shell braces are doubled: `{{` renders `{`, `}}` renders `}`.
const SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
# Ralph - long-running AI agent loop
# Provider: {provider_name}
# Usage: ./{script_file} [max_iterations]
#
# Runs the agent over the stories in {manifest_file} until every story
# passes or the iteration ceiling is reached.

set -e

MAX_ITERATIONS=${{1:-{default_max_iterations}}}
if ! [[ "$MAX_ITERATIONS" =~ ^[1-9][0-9]*$ ]]; then
  echo "max_iterations must be a positive integer (got: $MAX_ITERATIONS)" >&2
  exit 2
fi

SCRIPT_DIR="$(cd "$(dirname "${{BASH_SOURCE[0]}}")" && pwd)"
PRD_FILE="$SCRIPT_DIR/{manifest_file}"
PROGRESS_FILE="$(cd "$SCRIPT_DIR/{project_root}" && pwd)/{progress_file}"
ARCHIVE_DIR="$SCRIPT_DIR/{archive_dir}"
LAST_BRANCH_FILE="$SCRIPT_DIR/{last_branch_file}"
LAST_PRD_FILE="$SCRIPT_DIR/{last_manifest_file}"

read_branch() {{
  sed -n 's/^ *"branchName": *"\([^"]*\)".*/\1/p' "$1" 2>/dev/null | head -n 1
}}

init_progress() {{
  echo "{progress_header}" > "$PROGRESS_FILE"
  echo "Started: $(date)" >> "$PROGRESS_FILE"
  echo "---" >> "$PROGRESS_FILE"
}}

# Archive the previous run if the branch changed
if [ -f "$PRD_FILE" ] && [ -f "$LAST_BRANCH_FILE" ]; then
  CURRENT_BRANCH=$(read_branch "$PRD_FILE" || echo "")
  LAST_BRANCH=$(cat "$LAST_BRANCH_FILE" 2>/dev/null || echo "")

  if [ -n "$CURRENT_BRANCH" ] && [ -n "$LAST_BRANCH" ] && [ "$CURRENT_BRANCH" != "$LAST_BRANCH" ]; then
    DATE=$(date +%Y-%m-%d)
    FOLDER_NAME=$(echo "$LAST_BRANCH" | sed 's|^{branch_prefix}||')
    ARCHIVE_FOLDER="$ARCHIVE_DIR/$DATE-$FOLDER_NAME"

    echo "Archiving previous run: $LAST_BRANCH"
    mkdir -p "$ARCHIVE_FOLDER"
    if [ -f "$LAST_PRD_FILE" ]; then
      cp "$LAST_PRD_FILE" "$ARCHIVE_FOLDER/{manifest_file}"
    else
      cp "$PRD_FILE" "$ARCHIVE_FOLDER/{manifest_file}"
    fi
    if [ -f "$PROGRESS_FILE" ]; then
      cp "$PROGRESS_FILE" "$ARCHIVE_FOLDER/{progress_file}"
    fi
    echo "   Archived to: $ARCHIVE_FOLDER"

    init_progress
  fi
fi

# Track the current branch
if [ -f "$PRD_FILE" ]; then
  CURRENT_BRANCH=$(read_branch "$PRD_FILE" || echo "")
  if [ -n "$CURRENT_BRANCH" ]; then
    echo "$CURRENT_BRANCH" > "$LAST_BRANCH_FILE"
    cp "$PRD_FILE" "$LAST_PRD_FILE"
  fi
fi

if [ ! -f "$PROGRESS_FILE" ]; then
  init_progress
fi

echo "Starting Ralph - Max iterations: $MAX_ITERATIONS"
echo "Provider: {provider_name}"

for i in $(seq 1 "$MAX_ITERATIONS"); do
  echo ""
  echo "======================================================="
  echo "  Ralph Iteration $i of $MAX_ITERATIONS"
  echo "======================================================="

  OUTPUT=$({llm_command} 2>&1 | tee /dev/stderr) || true

  if echo "$OUTPUT" | grep -qF "{completion_token}"; then
    echo ""
    echo "Ralph completed all tasks!"
    echo "Completed at iteration $i of $MAX_ITERATIONS"
    exit 0
  fi

  echo "Iteration $i complete. Continuing..."
  sleep {pause_seconds}
done

echo ""
echo "Ralph reached max iterations ($MAX_ITERATIONS) without completing all tasks."
echo "Check $PROGRESS_FILE for status."
exit 1
"#;

/// Build the shell command that runs one agent iteration.
///
/// - anthropic: `anthropic messages create --model <id> --max-tokens <n> -f "$SCRIPT_DIR/prompt.md"`
/// - openai: `openai api chat.completions.create --model <id> --max-tokens <n> -f "$SCRIPT_DIR/prompt.md"`
/// - anything else: `<command> --model <id> -f "$SCRIPT_DIR/prompt.md"`
pub fn invocation_command(profile: &ProviderProfile) -> String {
    let model = shell_words::quote(&profile.model_id);
    let prompt = format!("\"$SCRIPT_DIR/{}\"", layout::PROMPT_FILE);
    let max_tokens = RESPONSE_MAX_TOKENS.min(profile.max_tokens);

    match &profile.family {
        CommandFamily::Anthropic => format!(
            "anthropic messages create --model {} --max-tokens {} -f {}",
            model, max_tokens, prompt
        ),
        CommandFamily::OpenAi => format!(
            "openai api chat.completions.create --model {} --max-tokens {} -f {}",
            model, max_tokens, prompt
        ),
        CommandFamily::Custom(command) => {
            format!("{} --model {} -f {}", command, model, prompt)
        }
    }
}

/// Render `ralph.sh` for a provider.
pub fn render_script(
    profile: &ProviderProfile,
    options: &RenderOptions,
) -> Result<String, TemplateError> {
    let vars = vars([
        ("provider_name", profile.display_name.clone()),
        ("llm_command", invocation_command(profile)),
        ("completion_token", COMPLETION_SENTINEL.to_string()),
        (
            "default_max_iterations",
            options.default_max_iterations.to_string(),
        ),
        ("pause_seconds", options.pause_seconds.to_string()),
        ("script_file", layout::SCRIPT_FILE.to_string()),
        ("manifest_file", layout::MANIFEST_FILE.to_string()),
        ("progress_file", layout::PROGRESS_FILE.to_string()),
        ("progress_header", layout::PROGRESS_HEADER.to_string()),
        ("project_root", layout::script_dir_to_root()),
        ("archive_dir", layout::ARCHIVE_DIR.to_string()),
        ("last_branch_file", layout::LAST_BRANCH_FILE.to_string()),
        ("last_manifest_file", layout::LAST_MANIFEST_FILE.to_string()),
        ("branch_prefix", BRANCH_PREFIX.to_string()),
    ]);
    render_template(SCRIPT_TEMPLATE, &vars)
}
