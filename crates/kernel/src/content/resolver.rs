//! Deterministic language-fallback resolution.
//!
//! Any tenant may have incomplete translation coverage for any language at
//! any time, so every lookup degrades through progressively less specific
//! sources and always terminates with a renderable string.

use indexmap::IndexMap;
use tracing::debug;

use super::tree::{TranslationTree, TreeNode, language_entry};

/// Language every chain passes through before scanning the whole map.
const PLATFORM_LANGUAGE: &str = "en";

/// Resolve the display string for a field path.
///
/// Precedence, first usable match wins (an entry is usable when it is a
/// string with non-empty trimmed content):
///
/// 1. `current_language`
/// 2. `default_language` (skipped when equal to the current language)
/// 3. `"en"` (skipped when it is the default language)
/// 4. the first entry in the landing map's insertion order
/// 5. `fallback`
///
/// Invalid input — a missing tree, an empty path, a path that does not
/// land on a language map — returns `fallback`. This function never fails
/// and never returns anything but a string.
pub fn resolve_content(
    tree: Option<&TranslationTree>,
    path: &str,
    current_language: &str,
    default_language: &str,
    fallback: &str,
) -> String {
    let Some(tree) = tree else {
        return fallback.to_string();
    };
    let Some(entries) = tree.branch_at(path) else {
        debug!(path, "field path did not land on a language map");
        return fallback.to_string();
    };

    if let Some(text) = language_entry(entries, current_language) {
        return text.to_string();
    }
    if current_language != default_language
        && let Some(text) = language_entry(entries, default_language)
    {
        return text.to_string();
    }
    if default_language != PLATFORM_LANGUAGE
        && let Some(text) = language_entry(entries, PLATFORM_LANGUAGE)
    {
        return text.to_string();
    }
    if let Some((code, text)) = first_available(entries) {
        debug!(path, language = %code, "resolved from first available language");
        return text.to_string();
    }

    fallback.to_string()
}

/// First entry in insertion order with usable content.
///
/// Deliberately rescans keys already tried by the earlier tiers: they
/// cannot match here, having failed above, and excluding them would change
/// insertion-order tie-breaking.
fn first_available(entries: &IndexMap<String, TreeNode>) -> Option<(&str, &str)> {
    entries.iter().find_map(|(code, node)| match node {
        TreeNode::Text(value) if !value.trim().is_empty() => {
            Some((code.as_str(), value.as_str()))
        }
        _ => None,
    })
}
