//! moka-backed in-process cache with sliding expiration.

use super::service::{CacheKey, CacheService};
use crate::domain::entities::Candidate;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default idle window after which an unread entry expires.
pub const DEFAULT_SLIDING_EXPIRATION: Duration = Duration::from_secs(300);

/// Default upper bound on the number of cached entries.
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

#[derive(Clone)]
enum CacheEntry {
    Candidates(Arc<Vec<Candidate>>),
    Candidate(Arc<Candidate>),
}

/// In-process cache for candidate lookups.
///
/// Built on `moka::future::Cache` with `time_to_idle`, so reads slide the
/// expiration window forward. No absolute lifetime is enforced.
pub struct MemoryCache {
    entries: Cache<CacheKey, CacheEntry>,
}

impl MemoryCache {
    /// Creates a cache with the given sliding window and capacity.
    pub fn new(sliding_expiration: Duration, max_capacity: u64) -> Self {
        info!(
            "Using MemoryCache (sliding expiration: {}s, capacity: {})",
            sliding_expiration.as_secs(),
            max_capacity
        );

        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(sliding_expiration)
            .build();

        Self { entries }
    }

    async fn lookup(&self, key: &CacheKey) -> Option<CacheEntry> {
        match self.entries.get(key).await {
            Some(entry) => {
                debug!("Cache HIT: {}", key);
                Some(entry)
            }
            None => {
                debug!("Cache MISS: {}", key);
                None
            }
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDING_EXPIRATION, DEFAULT_MAX_CAPACITY)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_candidates(&self) -> Option<Vec<Candidate>> {
        match self.lookup(&CacheKey::AllCandidates).await? {
            CacheEntry::Candidates(list) => Some(list.as_ref().clone()),
            CacheEntry::Candidate(_) => None,
        }
    }

    async fn set_candidates(&self, candidates: &[Candidate]) {
        self.entries
            .insert(
                CacheKey::AllCandidates,
                CacheEntry::Candidates(Arc::new(candidates.to_vec())),
            )
            .await;
        debug!("Cache SET: {} ({} items)", CacheKey::AllCandidates, candidates.len());
    }

    async fn get_candidate(&self, email: &str) -> Option<Candidate> {
        match self.lookup(&CacheKey::candidate(email)).await? {
            CacheEntry::Candidate(candidate) => Some(candidate.as_ref().clone()),
            CacheEntry::Candidates(_) => None,
        }
    }

    async fn set_candidate(&self, candidate: &Candidate) {
        let key = CacheKey::candidate(&candidate.email);
        debug!("Cache SET: {}", key);
        self.entries
            .insert(key, CacheEntry::Candidate(Arc::new(candidate.clone())))
            .await;
    }

    async fn invalidate(&self, key: &CacheKey) {
        if self.entries.remove(key).await.is_some() {
            debug!("Cache INVALIDATE: {}", key);
        }
    }

    async fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
