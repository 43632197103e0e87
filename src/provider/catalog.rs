//! The fixed provider catalog.

use super::{CommandFamily, ProviderId, ProviderProfile};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static CATALOG: LazyLock<BTreeMap<ProviderId, ProviderProfile>> = LazyLock::new(|| {
    [
        entry(
            ProviderId::Claude45,
            "Claude Opus 4.5",
            CommandFamily::Anthropic,
            "claude-opus-4-5-20251101",
            "Most capable Claude model for complex reasoning and code generation",
            200_000,
        ),
        entry(
            ProviderId::ClaudeSonnet,
            "Claude Sonnet 4",
            CommandFamily::Anthropic,
            "claude-sonnet-4-20250514",
            "Balanced Claude model for everyday tasks",
            200_000,
        ),
        entry(
            ProviderId::Gpt4o,
            "GPT-4o",
            CommandFamily::OpenAi,
            "gpt-4o",
            "OpenAI flagship multimodal model",
            128_000,
        ),
        entry(
            ProviderId::Gpt4Turbo,
            "GPT-4 Turbo",
            CommandFamily::OpenAi,
            "gpt-4-turbo",
            "OpenAI enhanced GPT-4 with vision capabilities",
            128_000,
        ),
    ]
    .into_iter()
    .map(|profile| (profile.id, profile))
    .collect()
});

fn entry(
    id: ProviderId,
    display_name: &str,
    family: CommandFamily,
    model_id: &str,
    description: &str,
    max_tokens: u32,
) -> ProviderProfile {
    ProviderProfile {
        id,
        display_name: display_name.to_string(),
        family,
        model_id: model_id.to_string(),
        description: description.to_string(),
        max_tokens,
    }
}

/// The whole catalog, keyed by provider identifier.
pub fn catalog() -> &'static BTreeMap<ProviderId, ProviderProfile> {
    &CATALOG
}

/// Look up the profile for a provider.
///
/// Every [`ProviderId`] has a catalog entry, so the lookup cannot fail.
pub fn profile(id: ProviderId) -> &'static ProviderProfile {
    &CATALOG[&id]
}
