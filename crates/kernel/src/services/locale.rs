//! Language selection state for the active session.
//!
//! Tracks the single display language a visitor sees, persists their
//! choice under a fixed preference key, and derives the ambient document
//! attributes (text direction, locale tag) from it. Single-writer,
//! synchronous: rapid sequential switches end on the last call's value.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::models::language::{Direction, validate_language_id};
use crate::prefs::PreferenceStore;

/// Preference-store key holding the visitor's chosen language.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

/// Platform default when nothing usable is stored.
const PLATFORM_DEFAULT: &str = "en";

/// Ambient presentation attributes derived from the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// Locale tag for the document (`lang` attribute).
    pub lang: String,

    /// Text direction (`dir` attribute).
    pub direction: Direction,
}

/// Session-scoped language selection.
pub struct LocaleService {
    current: RwLock<String>,
    prefs: Arc<dyn PreferenceStore>,
}

impl LocaleService {
    /// Restore the persisted preference, falling back to the platform
    /// default when none is stored or the stored value is invalid.
    pub fn new(prefs: Arc<dyn PreferenceStore>) -> Self {
        let initial = match prefs.get(PREFERRED_LANGUAGE_KEY) {
            Some(code) if validate_language_id(&code).is_ok() => code,
            Some(code) => {
                warn!(code = %code, "ignoring invalid stored language preference");
                PLATFORM_DEFAULT.to_string()
            }
            None => PLATFORM_DEFAULT.to_string(),
        };

        Self {
            current: RwLock::new(initial),
            prefs,
        }
    }

    /// The active language code.
    pub fn current_language(&self) -> String {
        self.current.read().clone()
    }

    /// Switch the active language.
    ///
    /// Updates in-memory state synchronously, persists the code under
    /// [`PREFERRED_LANGUAGE_KEY`], and thereby changes the derived document
    /// attributes. Last write wins; an empty code is ignored.
    pub fn set_language(&self, code: &str) {
        let code = code.trim();
        if code.is_empty() {
            warn!("ignoring empty language code");
            return;
        }
        if validate_language_id(code).is_err() {
            warn!(code, "language code does not look like a BCP 47 tag");
        }

        *self.current.write() = code.to_string();
        self.prefs.set(PREFERRED_LANGUAGE_KEY, code);
        debug!(language = code, "active language changed");
    }

    /// Presentation attributes for the current language.
    pub fn document(&self) -> DocumentAttributes {
        let lang = self.current_language();
        DocumentAttributes {
            direction: Direction::for_code(&lang),
            lang,
        }
    }
}

impl std::fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("current", &self.current_language())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;

    fn service() -> (Arc<MemoryPreferenceStore>, LocaleService) {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        let svc = LocaleService::new(prefs.clone());
        (prefs, svc)
    }

    #[test]
    fn starts_on_platform_default() {
        let (_, svc) = service();
        assert_eq!(svc.current_language(), "en");
        assert_eq!(svc.document().direction, Direction::Ltr);
    }

    #[test]
    fn restores_stored_preference() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(PREFERRED_LANGUAGE_KEY, "es");

        let svc = LocaleService::new(prefs);
        assert_eq!(svc.current_language(), "es");
    }

    #[test]
    fn invalid_stored_preference_falls_back() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(PREFERRED_LANGUAGE_KEY, "<script>");

        let svc = LocaleService::new(prefs);
        assert_eq!(svc.current_language(), "en");
    }

    #[test]
    fn set_language_updates_state_and_store() {
        let (prefs, svc) = service();

        svc.set_language("es");
        assert_eq!(svc.current_language(), "es");
        assert_eq!(prefs.get(PREFERRED_LANGUAGE_KEY).as_deref(), Some("es"));

        svc.set_language("fr");
        assert_eq!(svc.current_language(), "fr");
        assert_eq!(prefs.get(PREFERRED_LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn rtl_language_flips_document_direction() {
        let (_, svc) = service();

        svc.set_language("ar");
        let doc = svc.document();
        assert_eq!(doc.lang, "ar");
        assert_eq!(doc.direction, Direction::Rtl);

        svc.set_language("es");
        assert_eq!(svc.document().direction, Direction::Ltr);
    }

    #[test]
    fn empty_code_is_ignored() {
        let (prefs, svc) = service();
        svc.set_language("es");
        svc.set_language("   ");

        assert_eq!(svc.current_language(), "es");
        assert_eq!(prefs.get(PREFERRED_LANGUAGE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn sequential_switches_end_on_last_value() {
        let (_, svc) = service();
        for code in ["es", "fr", "de", "he", "pt-BR"] {
            svc.set_language(code);
        }
        assert_eq!(svc.current_language(), "pt-BR");
        assert_eq!(svc.document().direction, Direction::Ltr);
    }
}
