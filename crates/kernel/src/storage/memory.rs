//! In-memory implementation of SiteStorage.
//!
//! The bundled backend: a concurrent map of complete site records. Every
//! operation replaces the whole record, so readers never observe a
//! half-applied transition.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::SiteStorage;
use crate::models::Site;

/// In-memory site storage.
#[derive(Default)]
pub struct MemorySiteStorage {
    sites: DashMap<String, Site>,
}

impl MemorySiteStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a record (test and bootstrap convenience).
    pub fn insert(&self, site: Site) {
        self.sites.insert(site.id.clone(), site);
    }
}

#[async_trait]
impl SiteStorage for MemorySiteStorage {
    async fn load(&self, site_id: &str) -> Result<Option<Site>> {
        Ok(self.sites.get(site_id).map(|entry| entry.clone()))
    }

    async fn save(&self, site: &Site) -> Result<()> {
        self.sites.insert(site.id.clone(), site.clone());
        debug!(site = %site.id, "saved site record");
        Ok(())
    }

    async fn publish(&self, site: &Site) -> Result<()> {
        self.sites.insert(site.id.clone(), site.clone());
        debug!(site = %site.id, "published site record");
        Ok(())
    }

    async fn discard(&self, site: &Site) -> Result<()> {
        self.sites.insert(site.id.clone(), site.clone());
        debug!(site = %site.id, "discarded site draft");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Site>> {
        let mut sites: Vec<Site> = self
            .sites
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        sites.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(sites)
    }
}

impl std::fmt::Debug for MemorySiteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySiteStorage")
            .field("sites", &self.sites.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_site_storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemorySiteStorage>();
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let storage = MemorySiteStorage::new();
        let site = Site::new("acme-awards", "Acme Awards", "acme");

        storage.save(&site).await.unwrap();
        let loaded = storage.load("acme-awards").await.unwrap().unwrap();
        assert_eq!(loaded, site);

        assert!(storage.load("missing").await.unwrap().is_none());
        assert!(storage.exists("acme-awards").await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let storage = MemorySiteStorage::new();
        storage.insert(Site::new("zeta", "Z", "c"));
        storage.insert(Site::new("alpha", "A", "c"));

        let ids: Vec<String> = storage
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["alpha".to_string(), "zeta".to_string()]);
    }
}
