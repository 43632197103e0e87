//! Fixed folder layout of a bundle.
//!
//! ```text
//! <bundle root>/
//! ├── progress.txt
//! ├── tasks/
//! └── scripts/ralph/
//!     ├── ralph.sh
//!     ├── prompt.md
//!     ├── prd.json
//!     └── <reference docs>
//! ```
//!
//! At runtime `ralph.sh` adds `.last-branch`, `.last-prd.json` and `archive/`
//! next to itself.

/// Directory holding the script, prompt and manifest, relative to the root.
pub const SCRIPT_DIR: &str = "scripts/ralph";

pub const SCRIPT_FILE: &str = "ralph.sh";
pub const PROMPT_FILE: &str = "prompt.md";
pub const MANIFEST_FILE: &str = "prd.json";

/// Progress log, at the bundle root.
pub const PROGRESS_FILE: &str = "progress.txt";

/// First line of every progress log.
pub const PROGRESS_HEADER: &str = "# Ralph Progress Log";

/// Empty directory reserved for task artifacts.
pub const TASKS_DIR: &str = "tasks";

// Runtime files, relative to SCRIPT_DIR.
pub const ARCHIVE_DIR: &str = "archive";
pub const LAST_BRANCH_FILE: &str = ".last-branch";
pub const LAST_MANIFEST_FILE: &str = ".last-prd.json";

/// Names `ralph.sh` creates next to itself at runtime.
pub const RUNTIME_ENTRIES: &[&str] = &[ARCHIVE_DIR, LAST_BRANCH_FILE, LAST_MANIFEST_FILE];

/// Bundle-relative path of a file inside [`SCRIPT_DIR`].
pub fn in_script_dir(file: &str) -> String {
    format!("{}/{}", SCRIPT_DIR, file)
}

pub fn script_path() -> String {
    in_script_dir(SCRIPT_FILE)
}

pub fn prompt_path() -> String {
    in_script_dir(PROMPT_FILE)
}

pub fn manifest_path() -> String {
    in_script_dir(MANIFEST_FILE)
}

/// Relative path from [`SCRIPT_DIR`] back to the bundle root (`../..`).
pub fn script_dir_to_root() -> String {
    SCRIPT_DIR
        .split('/')
        .map(|_| "..")
        .collect::<Vec<_>>()
        .join("/")
}
