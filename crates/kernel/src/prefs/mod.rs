//! Durable key-value preference store.
//!
//! Visitor-scoped preferences (the chosen language, for one) survive the
//! session through this store. Persistence is best-effort: a backend that
//! cannot write logs a warning and carries on — losing a preference must
//! never take the site down.

mod file;

use dashmap::DashMap;

pub use file::FilePreferenceStore;

/// A durable string-to-string preference store.
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Remove a stored value.
    fn remove(&self, key: &str);
}

/// In-memory preference store.
///
/// Durable only for the process lifetime; used in tests and as a stand-in
/// when no preference path is configured.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: DashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

impl std::fmt::Debug for MemoryPreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPreferenceStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("preferred-language").is_none());

        store.set("preferred-language", "es");
        assert_eq!(store.get("preferred-language").as_deref(), Some("es"));

        store.set("preferred-language", "fr");
        assert_eq!(store.get("preferred-language").as_deref(), Some("fr"));

        store.remove("preferred-language");
        assert!(store.get("preferred-language").is_none());
    }

    #[test]
    fn memory_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryPreferenceStore>();
    }
}
