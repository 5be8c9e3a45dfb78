//! WeCelebrate test utilities.
//!
//! Helpers for integration testing: site fixtures, translation tree
//! builders, a failure-injecting storage wrapper, and assertion utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use wecelebrate_kernel::TranslationTree;
use wecelebrate_kernel::models::{DraftSettings, Site, SiteStatus};
use wecelebrate_kernel::storage::{MemorySiteStorage, SiteStorage};

/// Build a translation tree from inline JSON.
pub fn tree(value: serde_json::Value) -> TranslationTree {
    TranslationTree::from_value(value)
}

/// Create a test site with default values.
pub fn test_site(id: &str, name: &str) -> TestSite {
    TestSite {
        site: Site::new(id, name, "client-1"),
    }
}

/// A test site builder for creating fixtures.
#[derive(Debug, Clone)]
pub struct TestSite {
    site: Site,
}

impl TestSite {
    /// Set the serving status.
    pub fn with_status(mut self, status: SiteStatus) -> Self {
        self.site.status = status;
        self
    }

    /// Set the site default language.
    pub fn with_default_language(mut self, code: &str) -> Self {
        self.site.settings.default_language = code.to_string();
        self
    }

    /// Set the live language list.
    pub fn with_available_languages(mut self, codes: &[&str]) -> Self {
        self.site.available_languages = codes.iter().map(|c| (*c).to_string()).collect();
        self
    }

    /// Replace the live translation tree.
    pub fn with_translations(mut self, translations: TranslationTree) -> Self {
        self.site.translations = translations;
        self
    }

    /// Add a single live translation.
    pub fn with_translation(mut self, path: &str, language: &str, value: &str) -> Self {
        self.site.translations.set_text(path, language, value);
        self
    }

    /// Stage a draft overlay seeded from the current live fields.
    pub fn with_draft(mut self) -> Self {
        self.site.draft_settings = Some(DraftSettings {
            settings: self.site.settings.clone(),
            translations: Some(self.site.translations.clone()),
        });
        self.site.draft_available_languages = Some(self.site.available_languages.clone());
        self
    }

    /// Add a single draft translation, staging a draft if none exists.
    pub fn with_draft_translation(mut self, path: &str, language: &str, value: &str) -> Self {
        if self.site.draft_settings.is_none() {
            self = self.with_draft();
        }
        if let Some(draft) = self.site.draft_settings.as_mut() {
            draft
                .translations
                .get_or_insert_with(TranslationTree::new)
                .set_text(path, language, value);
        }
        self
    }

    /// Set the draft language list, staging a draft if none exists.
    pub fn with_draft_languages(mut self, codes: &[&str]) -> Self {
        if self.site.draft_settings.is_none() {
            self = self.with_draft();
        }
        self.site.draft_available_languages =
            Some(codes.iter().map(|c| (*c).to_string()).collect());
        self
    }

    /// Finish building.
    pub fn build(self) -> Site {
        self.site
    }
}

/// Storage wrapper that fails on demand.
///
/// Wraps [`MemorySiteStorage`] and rejects individual operations when
/// armed, for verifying that callers keep their pre-operation state on
/// persistence failure.
#[derive(Debug, Default)]
pub struct FailingSiteStorage {
    inner: MemorySiteStorage,
    fail_save: AtomicBool,
    fail_publish: AtomicBool,
    fail_discard: AtomicBool,
}

impl FailingSiteStorage {
    /// Create a wrapper with all operations succeeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the underlying store with a record.
    pub fn insert(&self, site: Site) {
        self.inner.insert(site);
    }

    /// Arm or disarm save failures.
    pub fn fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    /// Arm or disarm publish failures.
    pub fn fail_publish(&self, fail: bool) {
        self.fail_publish.store(fail, Ordering::SeqCst);
    }

    /// Arm or disarm discard failures.
    pub fn fail_discard(&self, fail: bool) {
        self.fail_discard.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SiteStorage for FailingSiteStorage {
    async fn load(&self, site_id: &str) -> Result<Option<Site>> {
        self.inner.load(site_id).await
    }

    async fn save(&self, site: &Site) -> Result<()> {
        if self.fail_save.load(Ordering::SeqCst) {
            anyhow::bail!("injected save failure");
        }
        self.inner.save(site).await
    }

    async fn publish(&self, site: &Site) -> Result<()> {
        if self.fail_publish.load(Ordering::SeqCst) {
            anyhow::bail!("injected publish failure");
        }
        self.inner.publish(site).await
    }

    async fn discard(&self, site: &Site) -> Result<()> {
        if self.fail_discard.load(Ordering::SeqCst) {
            anyhow::bail!("injected discard failure");
        }
        self.inner.discard(site).await
    }

    async fn list(&self) -> Result<Vec<Site>> {
        self.inner.list().await
    }
}

/// Assertion helpers for string content.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a translation tree resolves a path/language to a value.
    pub fn translates_to(
        tree: &wecelebrate_kernel::TranslationTree,
        path: &str,
        language: &str,
        expected: &str,
    ) {
        let actual = tree.text_at(path, language);
        assert_eq!(
            actual,
            Some(expected),
            "Expected '{path}' [{language}] to be '{expected}', got {actual:?}"
        );
    }
}

/// Common fixture trees.
pub mod fixtures {
    use super::tree;
    use wecelebrate_kernel::TranslationTree;

    /// A welcome-page tree with English, Spanish and French coverage.
    pub fn welcome_tree() -> TranslationTree {
        tree(serde_json::json!({
            "welcomePage": {
                "title": { "en": "Welcome", "es": "Bienvenido", "fr": "Bienvenue" },
                "message": { "en": "Hello", "es": "Hola", "fr": "Bonjour" }
            },
            "header": {
                "logoAlt": { "en": "Logo", "es": "Logotipo", "fr": "Logo" }
            },
            "footer": {
                "text": { "en": "Footer", "es": "Pie de página", "fr": "Pied de page" }
            }
        }))
    }
}
