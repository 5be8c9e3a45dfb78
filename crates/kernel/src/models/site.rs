//! Site model: the tenant-configurable unit.
//!
//! A site holds a live snapshot (settings, translations, languages) and at
//! most one draft overlay staged for review. Rendering reads live fields
//! only; the draft never leaks into resolution (see [`Site::resolve`]).

use serde::{Deserialize, Serialize};

use crate::content::{TranslationTree, resolve_content};

/// Serving status of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    /// Served to visitors.
    Active,
    /// Configured but not served.
    Inactive,
}

impl SiteStatus {
    /// Return the string representation used in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tenant-facing settings read by the content core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Anchor language for the fallback chain.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Whether visitors may switch languages.
    #[serde(default)]
    pub enable_language_selector: bool,

    /// ISO 4217 currency code for price display.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Preselected shipping country.
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Countries gifts may ship to; empty means no restriction.
    #[serde(default)]
    pub allowed_countries: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            enable_language_selector: false,
            default_currency: default_currency(),
            default_country: default_country(),
            allowed_countries: Vec::new(),
        }
    }
}

/// Unpublished settings overlay staged for review.
///
/// Carries a full copy of the settings (seeded from live when the draft is
/// created) plus an optional translations overlay. Structurally independent
/// of the live fields: mutating one never touches the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSettings {
    #[serde(flatten)]
    pub settings: SiteSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<TranslationTree>,
}

/// Site record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Site identifier (slug).
    pub id: String,

    /// Human-readable site name.
    pub name: String,

    /// Owning client identifier.
    pub client_id: String,

    /// Serving status.
    pub status: SiteStatus,

    /// Live settings.
    #[serde(default)]
    pub settings: SiteSettings,

    /// Live, published content. Rendering reads only this tree.
    #[serde(default)]
    pub translations: TranslationTree,

    /// Languages offered to visitors.
    #[serde(default)]
    pub available_languages: Vec<String>,

    /// Unpublished draft overlay; presence means changes are staged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_settings: Option<DraftSettings>,

    /// Languages staged alongside the draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_available_languages: Option<Vec<String>>,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,
}

impl Site {
    /// Create a site with only live fields populated (no draft).
    pub fn new(id: impl Into<String>, name: impl Into<String>, client_id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: id.into(),
            name: name.into(),
            client_id: client_id.into(),
            status: SiteStatus::Active,
            settings: SiteSettings::default(),
            translations: TranslationTree::new(),
            available_languages: vec!["en".to_string()],
            draft_settings: None,
            draft_available_languages: None,
            created: now,
            changed: now,
        }
    }

    /// The site's default language, `"en"` when settings are silent.
    pub fn default_language(&self) -> &str {
        let code = self.settings.default_language.trim();
        if code.is_empty() { "en" } else { code }
    }

    /// Whether unpublished changes are staged.
    pub fn has_draft(&self) -> bool {
        self.draft_settings.is_some()
    }

    /// Whether the site is served to visitors.
    pub fn is_active(&self) -> bool {
        self.status == SiteStatus::Active
    }

    /// Resolve display content from the live tree.
    ///
    /// Always reads `translations`, never the draft overlay — unpublished
    /// content must not be observable through rendering.
    pub fn resolve(&self, path: &str, current_language: &str, fallback: &str) -> String {
        resolve_content(
            Some(&self.translations),
            path,
            current_language,
            self.default_language(),
            fallback,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_site_has_no_draft() {
        let site = Site::new("acme-awards", "Acme Awards", "acme");
        assert!(!site.has_draft());
        assert!(site.is_active());
        assert_eq!(site.default_language(), "en");
        assert_eq!(site.available_languages, vec!["en".to_string()]);
    }

    #[test]
    fn default_language_falls_back_when_blank() {
        let mut site = Site::new("s", "S", "c");
        site.settings.default_language = "   ".to_string();
        assert_eq!(site.default_language(), "en");

        site.settings.default_language = "fr".to_string();
        assert_eq!(site.default_language(), "fr");
    }

    #[test]
    fn resolve_reads_live_never_draft() {
        let mut site = Site::new("s", "S", "c");
        site.translations.set_text("welcomePage.title", "en", "Live Title");

        let mut draft_tree = TranslationTree::new();
        draft_tree.set_text("welcomePage.title", "en", "Draft Title");
        site.draft_settings = Some(DraftSettings {
            settings: site.settings.clone(),
            translations: Some(draft_tree),
        });

        assert_eq!(
            site.resolve("welcomePage.title", "en", "X"),
            "Live Title"
        );
    }

    #[test]
    fn deserializes_minimal_record_with_defaults() {
        let site: Site = serde_json::from_value(json!({
            "id": "s1",
            "name": "Site One",
            "client_id": "c1",
            "status": "active",
            "created": 1700000000,
            "changed": 1700000000
        }))
        .unwrap();

        assert_eq!(site.settings.default_language, "en");
        assert_eq!(site.settings.default_currency, "USD");
        assert!(site.translations.is_empty());
        assert!(site.draft_settings.is_none());
    }

    #[test]
    fn draft_settings_flattens_settings_fields() {
        let draft: DraftSettings = serde_json::from_value(json!({
            "default_language": "es",
            "enable_language_selector": true,
            "translations": { "a": { "es": "Hola" } }
        }))
        .unwrap();

        assert_eq!(draft.settings.default_language, "es");
        assert!(draft.settings.enable_language_selector);
        assert_eq!(
            draft.translations.unwrap().text_at("a", "es"),
            Some("Hola")
        );
    }

    #[test]
    fn serde_round_trip_with_draft() {
        let mut site = Site::new("s", "S", "c");
        site.translations.set_text("a.b", "en", "Live");
        let mut draft_tree = TranslationTree::new();
        draft_tree.set_text("a.b", "en", "Draft");
        site.draft_settings = Some(DraftSettings {
            settings: site.settings.clone(),
            translations: Some(draft_tree),
        });
        site.draft_available_languages = Some(vec!["en".to_string(), "es".to_string()]);

        let encoded = serde_json::to_string(&site).unwrap();
        let decoded: Site = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, site);
    }

    #[test]
    fn site_without_draft_omits_draft_keys() {
        let site = Site::new("s", "S", "c");
        let encoded = serde_json::to_string(&site).unwrap();
        assert!(!encoded.contains("draft_settings"));
        assert!(!encoded.contains("draft_available_languages"));
    }
}
