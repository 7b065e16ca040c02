//! No-op cache implementation for disabled caching.

use super::service::{CacheKey, CacheService};
use crate::domain::entities::Candidate;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled via `CACHE_ENABLED=false`. Every read is a
/// miss, so the repository always goes to the store.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_candidates(&self) -> Option<Vec<Candidate>> {
        None
    }

    async fn set_candidates(&self, _candidates: &[Candidate]) {}

    async fn get_candidate(&self, _email: &str) -> Option<Candidate> {
        None
    }

    async fn set_candidate(&self, _candidate: &Candidate) {}

    async fn invalidate(&self, _key: &CacheKey) {}

    async fn contains(&self, _key: &CacheKey) -> bool {
        false
    }

    async fn health_check(&self) -> bool {
        true
    }
}
