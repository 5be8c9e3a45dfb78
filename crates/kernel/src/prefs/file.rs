//! File-backed preference store.
//!
//! Stores preferences as a flat JSON object on disk, the library analog of
//! a browser's local storage. Reads come from an in-memory cache; every
//! write rewrites the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::warn;

use super::PreferenceStore;

/// Preference store persisted to a JSON file.
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open a store at `path`, loading any existing entries.
    ///
    /// A missing file starts empty; an unreadable or malformed file is
    /// logged and treated as empty rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed preference file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable preference file, starting empty");
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Write the current entries to disk. Failures are logged, not raised.
    fn persist(&self, entries: &BTreeMap<String, String>) {
        let encoded = match serde_json::to_string_pretty(entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "failed to encode preferences");
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), error = %e, "failed to create preference directory");
            return;
        }
        if let Err(e) = fs::write(&self.path, encoded) {
            warn!(path = %self.path.display(), error = %e, "failed to write preference file");
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

impl std::fmt::Debug for FilePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePreferenceStore")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let store = FilePreferenceStore::open(&path);
            store.set("preferred-language", "he");
        }

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get("preferred-language").as_deref(), Some("he"));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("absent.json"));
        assert!(store.get("preferred-language").is_none());
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert!(store.get("preferred-language").is_none());

        // Still usable for writes afterwards.
        store.set("preferred-language", "fr");
        assert_eq!(store.get("preferred-language").as_deref(), Some("fr"));
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = FilePreferenceStore::open(&path);
        store.set("preferred-language", "es");
        store.remove("preferred-language");

        let reopened = FilePreferenceStore::open(&path);
        assert!(reopened.get("preferred-language").is_none());
    }
}
