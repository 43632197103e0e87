//! Model provider catalog.
//!
//! Each provider profile describes how the generated `ralph.sh` invokes a
//! language-model CLI. The catalog is fixed reference data built once on first
//! use and never mutated.
//!
//! | Identifier      | Family    | Model                      |
//! |-----------------|-----------|----------------------------|
//! | `CLAUDE_4_5`    | anthropic | `claude-opus-4-5-20251101` |
//! | `CLAUDE_SONNET` | anthropic | `claude-sonnet-4-20250514` |
//! | `GPT_4O`        | openai    | `gpt-4o`                   |
//! | `GPT_4_TURBO`   | openai    | `gpt-4-turbo`              |

mod catalog;

pub use catalog::{catalog, profile};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog provider.
///
/// Serialized in SCREAMING_SNAKE_CASE, which is also what `prd.json` carries
/// in its `llmProvider` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "CLAUDE_4_5")]
    Claude45,
    #[serde(rename = "CLAUDE_SONNET")]
    ClaudeSonnet,
    #[serde(rename = "GPT_4O")]
    Gpt4o,
    #[serde(rename = "GPT_4_TURBO")]
    Gpt4Turbo,
}

impl ProviderId {
    /// Every provider, in catalog order. The first entry is the default.
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Claude45,
        ProviderId::ClaudeSonnet,
        ProviderId::Gpt4o,
        ProviderId::Gpt4Turbo,
    ];

    /// The canonical identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Claude45 => "CLAUDE_4_5",
            ProviderId::ClaudeSonnet => "CLAUDE_SONNET",
            ProviderId::Gpt4o => "GPT_4O",
            ProviderId::Gpt4Turbo => "GPT_4_TURBO",
        }
    }

    /// Parse a provider identifier.
    ///
    /// Matching is case-insensitive and accepts `-` in place of `_`, so
    /// `gpt-4o` and `GPT_4O` resolve to the same provider.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The CLI family a provider is invoked through.
///
/// The family decides the argument shape of the generated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFamily {
    /// `anthropic messages create ...`
    Anthropic,
    /// `openai api chat.completions.create ...`
    OpenAi,
    /// Any other executable, invoked as `<command> --model <id> -f <prompt>`.
    Custom(String),
}

impl CommandFamily {
    /// The executable name for this family.
    pub fn command(&self) -> &str {
        match self {
            CommandFamily::Anthropic => "anthropic",
            CommandFamily::OpenAi => "openai",
            CommandFamily::Custom(cmd) => cmd,
        }
    }
}

/// Static description of a model provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    /// Catalog identifier this profile is registered under.
    pub id: ProviderId,
    /// Human-readable name shown in the prompt and script banner.
    pub display_name: String,
    /// CLI family used to invoke the model.
    pub family: CommandFamily,
    /// Concrete model identifier passed to `--model`.
    pub model_id: String,
    /// Short description for listings.
    pub description: String,
    /// Maximum token budget of the model.
    pub max_tokens: u32,
}
