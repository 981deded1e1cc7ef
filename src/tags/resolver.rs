//! Tag documentation lookup across providers

use std::sync::Arc;

use crate::tags::provider::{TagInfo, TagProvider};

/// Keep the providers that apply to documents of `language_id`, in order
pub fn applicable_providers<'a>(
    providers: &'a [Arc<dyn TagProvider>],
    language_id: &str,
) -> Vec<&'a dyn TagProvider> {
    providers
        .iter()
        .map(|provider| provider.as_ref() as &dyn TagProvider)
        .filter(|provider| provider.is_applicable(language_id))
        .collect()
}

/// Look up documentation for `tag_name`.
///
/// Names are compared case-insensitively. Providers are queried in order and
/// the first entry with a matching name wins; nothing after it is consulted.
pub fn resolve_tag_doc<'a>(
    tag_name: &str,
    providers: &[&'a dyn TagProvider],
) -> Option<TagInfo<'a>> {
    let key = tag_name.to_lowercase();
    providers.iter().copied().find_map(|provider| {
        provider
            .tags()
            .find(|tag| tag.name.chars().flat_map(char::to_lowercase).eq(key.chars()))
    })
}
