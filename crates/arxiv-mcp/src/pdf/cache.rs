//! In-memory cache of extracted paper text.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::config::Config;
use crate::models::{ArxivId, PaperContent};

/// Extracted content keyed by `"{base id}_{max_pages}"`.
///
/// Weighted by text bytes so a handful of long papers cannot push the
/// process past `content_cache_bytes`.
#[derive(Clone)]
pub struct ContentCache {
    inner: Cache<String, Arc<PaperContent>>,
}

impl ContentCache {
    /// Create a cache bounded by total text bytes and a time-to-live.
    #[must_use]
    pub fn new(max_bytes: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_bytes)
            .weigher(|key: &String, value: &Arc<PaperContent>| -> u32 {
                u32::try_from(key.len() + value.text_len()).unwrap_or(u32::MAX).max(1)
            })
            .time_to_live(ttl)
            .build();

        Self { inner }
    }

    /// Create a cache from the runtime configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.content_cache_bytes, config.content_cache_ttl)
    }

    /// Cache key for a paper at a given page bound.
    #[must_use]
    pub fn key(id: &ArxivId, max_pages: u32) -> String {
        format!("{}_{}", id.base(), max_pages)
    }

    /// Look up previously extracted content.
    pub async fn get(&self, id: &ArxivId, max_pages: u32) -> Option<Arc<PaperContent>> {
        self.inner.get(&Self::key(id, max_pages)).await
    }

    /// Store extracted content.
    pub async fn insert(&self, id: &ArxivId, max_pages: u32, content: Arc<PaperContent>) {
        self.inner.insert(Self::key(id, max_pages), content).await;
    }

    /// Approximate number of cached entries.
    ///
    /// Eviction bookkeeping runs lazily; call [`Self::sync`] first for an
    /// exact figure.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Total weight (text bytes) currently held.
    #[must_use]
    pub fn weighted_size(&self) -> u64 {
        self.inner.weighted_size()
    }

    /// Flush pending eviction bookkeeping.
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl std::fmt::Debug for ContentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("entries", &self.inner.entry_count())
            .field("weighted_size", &self.inner.weighted_size())
            .finish()
    }
}
