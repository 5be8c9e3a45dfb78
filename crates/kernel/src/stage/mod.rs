//! Draft staging and publish workflow for site records.
//!
//! A site holds a live snapshot and at most one draft overlay:
//!
//! - **save_draft**: seed/refresh the overlay from a partial update; live
//!   fields are only read as the seed.
//! - **publish**: promote the overlay to live and clear it.
//! - **discard_draft**: clear the overlay; live fields untouched.
//!
//! All three are pure transforms returning a new record — readers of the
//! old record never observe a partially applied transition, and a failed
//! persistence call leaves the caller's record exactly as it was. The
//! [`StageService`] pairs the transforms with persistence and gates
//! publishing through the translation validator.

use std::sync::Arc;

use tracing::{debug, info};

use crate::content::{TranslationTree, can_publish_translations};
use crate::error::{KernelError, KernelResult};
use crate::models::site::{DraftSettings, Site};
use crate::storage::SiteStorage;

/// Partial update merged into a site's draft overlay.
///
/// Unset fields leave the corresponding draft value unchanged.
#[derive(Debug, Clone, Default)]
pub struct DraftUpdate {
    pub default_language: Option<String>,
    pub enable_language_selector: Option<bool>,
    pub default_currency: Option<String>,
    pub default_country: Option<String>,
    pub allowed_countries: Option<Vec<String>>,
    pub translations: Option<TranslationTree>,
    pub available_languages: Option<Vec<String>>,
}

impl DraftUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a default language change.
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = Some(code.into());
        self
    }

    /// Stage a language selector toggle.
    pub fn with_language_selector(mut self, enabled: bool) -> Self {
        self.enable_language_selector = Some(enabled);
        self
    }

    /// Stage a replacement translation tree.
    pub fn with_translations(mut self, translations: TranslationTree) -> Self {
        self.translations = Some(translations);
        self
    }

    /// Stage a replacement language list.
    pub fn with_available_languages(mut self, languages: Vec<String>) -> Self {
        self.available_languages = Some(languages);
        self
    }
}

/// Merge a partial update into a fresh copy of the site's draft.
///
/// When no draft exists, one is seeded from the live settings, translations
/// and language list. Live fields are never modified; successive calls
/// overwrite the previous draft values field by field.
pub fn save_draft(site: &Site, update: DraftUpdate) -> Site {
    let mut next = site.clone();

    let mut draft = next.draft_settings.take().unwrap_or_else(|| DraftSettings {
        settings: site.settings.clone(),
        translations: Some(site.translations.clone()),
    });
    if next.draft_available_languages.is_none() {
        next.draft_available_languages = Some(site.available_languages.clone());
    }

    if let Some(code) = update.default_language {
        draft.settings.default_language = code;
    }
    if let Some(enabled) = update.enable_language_selector {
        draft.settings.enable_language_selector = enabled;
    }
    if let Some(currency) = update.default_currency {
        draft.settings.default_currency = currency;
    }
    if let Some(country) = update.default_country {
        draft.settings.default_country = country;
    }
    if let Some(countries) = update.allowed_countries {
        draft.settings.allowed_countries = countries;
    }
    if let Some(translations) = update.translations {
        draft.translations = Some(translations);
    }
    if let Some(languages) = update.available_languages {
        next.draft_available_languages = Some(languages);
    }

    next.draft_settings = Some(draft);
    next.changed = chrono::Utc::now().timestamp();

    debug!(site = %next.id, "saved draft overlay");
    next
}

/// Promote the draft overlay to live and clear it.
///
/// Live translations, settings and available languages are replaced by the
/// draft's values in a single record swap. A site without a draft is
/// returned unchanged — the live state is never corrupted.
pub fn publish(site: &Site) -> Site {
    let Some(draft) = &site.draft_settings else {
        debug!(site = %site.id, "publish with no draft is a no-op");
        return site.clone();
    };

    let mut next = site.clone();
    next.settings = draft.settings.clone();
    if let Some(translations) = &draft.translations {
        next.translations = translations.clone();
    }
    if let Some(languages) = &site.draft_available_languages {
        next.available_languages = languages.clone();
    }
    next.draft_settings = None;
    next.draft_available_languages = None;
    next.changed = chrono::Utc::now().timestamp();

    next
}

/// Clear the draft overlay; live fields untouched.
pub fn discard_draft(site: &Site) -> Site {
    let mut next = site.clone();
    next.draft_settings = None;
    next.draft_available_languages = None;
    next.changed = chrono::Utc::now().timestamp();
    next
}

/// Result of a publish attempt.
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Whether the draft was promoted to live.
    pub published: bool,

    /// The resulting site record (unchanged when not published).
    pub site: Site,

    /// Why publishing was refused, when it was.
    pub reason: Option<String>,
}

impl PublishResult {
    /// The draft was promoted.
    pub fn published(site: Site) -> Self {
        Self {
            published: true,
            site,
            reason: None,
        }
    }

    /// The draft was not promoted.
    pub fn blocked(site: Site, reason: impl Into<String>) -> Self {
        Self {
            published: false,
            site,
            reason: Some(reason.into()),
        }
    }
}

/// Stage service pairing the pure transforms with persistence.
#[derive(Clone)]
pub struct StageService {
    storage: Arc<dyn SiteStorage>,
    /// Field paths that must carry default-language content before publish.
    required_paths: Vec<String>,
}

impl StageService {
    /// Create a new stage service.
    pub fn new(storage: Arc<dyn SiteStorage>, required_paths: Vec<String>) -> Self {
        Self {
            storage,
            required_paths,
        }
    }

    /// Load a site by ID, failing when it does not exist.
    pub async fn load_site(&self, site_id: &str) -> KernelResult<Site> {
        self.storage
            .load(site_id)
            .await
            .map_err(KernelError::Storage)?
            .ok_or_else(|| KernelError::SiteNotFound(site_id.to_string()))
    }

    /// Stage a draft update and persist the result.
    ///
    /// The caller's record is never mutated: on a storage failure the
    /// error propagates and the pre-operation state remains valid for a
    /// retry.
    pub async fn save_draft(&self, site: &Site, update: DraftUpdate) -> KernelResult<Site> {
        let next = save_draft(site, update);
        self.storage
            .save(&next)
            .await
            .map_err(KernelError::Storage)?;
        Ok(next)
    }

    /// Validate and publish the site's draft.
    ///
    /// Validation failure is a structured outcome, not an error; only the
    /// persistence boundary can fail.
    pub async fn publish(&self, site: &Site) -> KernelResult<PublishResult> {
        let Some(draft) = &site.draft_settings else {
            return Ok(PublishResult::blocked(
                site.clone(),
                "no draft to publish".to_string(),
            ));
        };

        // Gate on the content that will become live.
        let candidate = draft.translations.as_ref().unwrap_or(&site.translations);
        let default_language = {
            let code = draft.settings.default_language.trim();
            if code.is_empty() { "en" } else { code }
        };
        let check = can_publish_translations(candidate, &self.required_paths, default_language);
        if !check.can_publish {
            let reason = check
                .reason
                .unwrap_or_else(|| "publish validation failed".to_string());
            info!(site = %site.id, reason = %reason, "publish refused");
            return Ok(PublishResult::blocked(site.clone(), reason));
        }

        let next = publish(site);
        self.storage
            .publish(&next)
            .await
            .map_err(KernelError::Storage)?;

        info!(site = %next.id, "published draft to live");
        Ok(PublishResult::published(next))
    }

    /// Discard the site's draft and persist the result.
    pub async fn discard(&self, site: &Site) -> KernelResult<Site> {
        let next = discard_draft(site);
        self.storage
            .discard(&next)
            .await
            .map_err(KernelError::Storage)?;

        info!(site = %next.id, "discarded draft");
        Ok(next)
    }
}

impl std::fmt::Debug for StageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageService")
            .field("required_paths", &self.required_paths)
            .finish()
    }
}
