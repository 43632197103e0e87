//! `prompt.md`: instructions the agent reads on every loop iteration.
//!
//! The skeleton is identical for every provider; only the project name,
//! description, provider name and bundle paths are interpolated.

use super::template::{TemplateError, render_template, vars};
use crate::bundle::layout;
use crate::manifest::Manifest;
use crate::provider::ProviderProfile;

use super::COMPLETION_SENTINEL;

const PROMPT_TEMPLATE: &str = r#"# Ralph Agent Instructions

You are an autonomous coding agent working on the "{project}" project.

## Project Goal
{description}

## LLM Provider
This project is configured to use **{provider_name}**.

## Your Task

1. Read the PRD at `{manifest_path}`
2. Read the progress log at `{progress_path}` (check the Codebase Patterns section first)
3. Check you're on the branch named in the PRD `branchName`. If not, check it out or create it from main.
4. Pick the **highest priority** user story where `passes: false`
5. Implement that single user story
6. Run quality checks (typecheck, lint, test - whatever the project requires)
7. Update AGENTS.md files if you discover reusable patterns (see below)
8. If checks pass, commit ALL changes with message: `feat: [Story ID] - [Story Title]`
9. Update the PRD to set `passes: true` for the completed story
10. Append your progress to `{progress_path}`

## Progress Report Format

APPEND to `{progress_path}` (never replace, always append):
```
## [Date/Time] - [Story ID]
- What was implemented
- Files changed
- **Learnings for future iterations:**
  - Patterns discovered (e.g., "this codebase uses X for Y")
  - Gotchas encountered (e.g., "don't forget to update Z when changing W")
  - Useful context (e.g., "the settings panel is in component X")
---
```

The learnings section matters most: it keeps later iterations from repeating mistakes.

## Consolidate Patterns

If you discover a **reusable pattern** later iterations should know, add it to the `## Codebase Patterns` section at the TOP of `{progress_path}` (create it if missing):

```
## Codebase Patterns
- Example: Use `sql<number>` template for aggregations
- Example: Always use `IF NOT EXISTS` for migrations
```

Only add patterns that are **general and reusable**, not story-specific details.

## Update AGENTS.md Files

Before committing, check whether edited directories have an AGENTS.md (or a parent does) and add knowledge future work there needs:
- API patterns or conventions specific to that module
- Non-obvious requirements
- Dependencies between files
- Testing approaches or environment requirements

Do NOT add story-specific details, temporary debugging notes, or anything already in `{progress_path}`.

## Quality Requirements

- ALL commits must pass the project's quality checks (typecheck, lint, test)
- Do NOT commit broken code
- Keep changes focused and minimal
- Follow existing code patterns

## Browser Testing (Required for Frontend Stories)

For any story that changes UI, verify it in the browser:

1. Load the `dev-browser` skill
2. Navigate to the relevant page
3. Verify the UI changes work as expected
4. Take a screenshot if it helps the progress log

A frontend story is NOT complete until browser verification passes.

## Stop Condition

After completing a user story, check whether ALL stories have `passes: true`.

If ALL stories are complete and passing, reply with:
{completion_token}

If there are still stories with `passes: false`, end your response normally (another iteration will pick up the next story).

## Important

- Work on ONE story per iteration
- Commit frequently
- Keep CI green
- Read the Codebase Patterns section in `{progress_path}` before starting
"#;

/// Render `prompt.md` for a manifest and provider.
pub fn render_prompt(
    manifest: &Manifest,
    profile: &ProviderProfile,
) -> Result<String, TemplateError> {
    let manifest_path = layout::manifest_path();
    let vars = vars([
        ("project", manifest.project.as_str()),
        ("description", manifest.description.as_str()),
        ("provider_name", profile.display_name.as_str()),
        ("manifest_path", manifest_path.as_str()),
        ("progress_path", layout::PROGRESS_FILE),
        ("completion_token", COMPLETION_SENTINEL),
    ]);
    render_template(PROMPT_TEMPLATE, &vars)
}
