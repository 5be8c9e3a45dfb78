//! Publish gating for translation trees.
//!
//! Publishing requires every mandatory field path to carry content in the
//! site's default language — the one language with no further fallback.
//! Gaps in secondary languages never block a publish; the resolver
//! degrades those at render time.

use super::tree::TranslationTree;

/// Outcome of a publish validation.
///
/// A refusal is an expected business-rule result, not an error: the first
/// failing path (in input order) is named in `reason`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCheck {
    /// Whether publishing is permitted.
    pub can_publish: bool,
    /// Why publishing was refused, when it was.
    pub reason: Option<String>,
}

impl PublishCheck {
    /// Publishing is permitted.
    pub fn allowed() -> Self {
        Self {
            can_publish: true,
            reason: None,
        }
    }

    /// Publishing is refused for the given reason.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            can_publish: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether a candidate translation tree may be published.
///
/// Every path in `required_paths` must resolve to a usable string (present,
/// non-empty after trimming) in `default_language`.
pub fn can_publish_translations(
    translations: &TranslationTree,
    required_paths: &[String],
    default_language: &str,
) -> PublishCheck {
    for path in required_paths {
        if translations.text_at(path, default_language).is_none() {
            return PublishCheck::blocked(format!(
                "missing required translation for '{path}' in default language '{default_language}'"
            ));
        }
    }
    PublishCheck::allowed()
}
