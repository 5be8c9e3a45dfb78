//! Site persistence abstraction.
//!
//! All site reads and writes from the workflow layer go through
//! [`SiteStorage`]. The in-memory record is the source of truth read by
//! the resolver; a backend only has to persist whole records, so staging
//! invariants hold regardless of when (or whether) a persistence call
//! completes. Swapping the implementation — in-memory, file, remote —
//! changes no call sites.

mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemorySiteStorage;

use crate::models::Site;

/// The core trait for site persistence.
///
/// Backends persist complete records: a failed call must leave the
/// previously stored record intact so callers can retry safely.
#[async_trait]
pub trait SiteStorage: Send + Sync {
    /// Load a site by ID.
    ///
    /// Returns `None` if the site doesn't exist.
    async fn load(&self, site_id: &str) -> Result<Option<Site>>;

    /// Persist a site record with its current draft overlay.
    async fn save(&self, site: &Site) -> Result<()>;

    /// Persist the promotion of a draft to live.
    async fn publish(&self, site: &Site) -> Result<()>;

    /// Persist the removal of a draft overlay.
    async fn discard(&self, site: &Site) -> Result<()>;

    /// List all sites ordered by ID.
    async fn list(&self) -> Result<Vec<Site>>;

    /// Check if a site exists.
    async fn exists(&self, site_id: &str) -> Result<bool> {
        Ok(self.load(site_id).await?.is_some())
    }
}
