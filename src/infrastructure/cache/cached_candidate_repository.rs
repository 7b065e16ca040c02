//! Read-through cached repository over a [`CandidateStore`].
//!
//! Reads are served from the cache when a live entry exists and populate it
//! on a miss. Writes always go to the store first and then invalidate:
//!
//! | operation         | collection entry | per-email entry |
//! |-------------------|------------------|-----------------|
//! | `add`             | invalidated      | untouched       |
//! | `update`          | invalidated      | invalidated     |
//! | `delete_by_email` | invalidated      | invalidated     |
//!
//! `delete_by_email` for an unknown email touches neither the store nor the
//! cache. Lookups that find nothing are not cached.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::service::{CacheKey, CacheService};
use crate::domain::entities::Candidate;
use crate::domain::repositories::{CandidateRepository, CandidateStore};
use crate::error::StoreError;

/// Candidate repository decorator that caches reads from a store.
///
/// Cache population after a miss is fenced by an invalidation generation.
/// Writers bump it while invalidating, readers only populate when it did
/// not move during their store read, so a read that raced a write cannot
/// leave a stale entry behind.
pub struct CachedCandidateRepository<S: CandidateStore + ?Sized> {
    store: Arc<S>,
    cache: Arc<dyn CacheService>,
    generation: Mutex<u64>,
}

impl<S: CandidateStore + ?Sized> CachedCandidateRepository<S> {
    /// Creates a repository over `store` using `cache` for reads.
    pub fn new(store: Arc<S>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            store,
            cache,
            generation: Mutex::new(0),
        }
    }

    async fn current_generation(&self) -> u64 {
        *self.generation.lock().await
    }

    /// Invalidates `keys` after a completed store mutation.
    async fn invalidate(&self, keys: &[CacheKey]) {
        let mut generation = self.generation.lock().await;
        *generation += 1;

        for key in keys {
            self.cache.invalidate(key).await;
            metrics::counter!("candidate_cache_invalidations_total", "entry" => key.entry_label())
                .increment(1);
        }
    }

    async fn populate_candidates(&self, seen: u64, candidates: &[Candidate]) {
        let generation = self.generation.lock().await;
        if *generation == seen {
            self.cache.set_candidates(candidates).await;
        } else {
            debug!("Skipping cache fill for {}: invalidated during read", CacheKey::AllCandidates);
        }
    }

    async fn populate_candidate(&self, seen: u64, candidate: &Candidate) {
        let generation = self.generation.lock().await;
        if *generation == seen {
            self.cache.set_candidate(candidate).await;
        } else {
            debug!(
                "Skipping cache fill for {}: invalidated during read",
                CacheKey::candidate(&candidate.email)
            );
        }
    }
}

fn record_lookup(key: &CacheKey, hit: bool) {
    let label = key.entry_label();
    if hit {
        metrics::counter!("candidate_cache_hits_total", "entry" => label).increment(1);
    } else {
        metrics::counter!("candidate_cache_misses_total", "entry" => label).increment(1);
    }
}

#[async_trait]
impl<S: CandidateStore + ?Sized> CandidateRepository for CachedCandidateRepository<S> {
    async fn list_all(&self) -> Result<Vec<Candidate>, StoreError> {
        if let Some(candidates) = self.cache.get_candidates().await {
            record_lookup(&CacheKey::AllCandidates, true);
            return Ok(candidates);
        }
        record_lookup(&CacheKey::AllCandidates, false);

        let seen = self.current_generation().await;
        let candidates = self.store.list().await?;
        self.populate_candidates(seen, &candidates).await;

        Ok(candidates)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        let key = CacheKey::candidate(email);
        if let Some(candidate) = self.cache.get_candidate(email).await {
            record_lookup(&key, true);
            return Ok(Some(candidate));
        }
        record_lookup(&key, false);

        let seen = self.current_generation().await;
        let candidate = self.store.get_by_email(email).await?;
        if let Some(ref found) = candidate {
            self.populate_candidate(seen, found).await;
        }

        Ok(candidate)
    }

    async fn add(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let stored = self.store.insert(candidate).await?;
        // The per-email entry is left to be filled by the next lookup.
        self.invalidate(&[CacheKey::AllCandidates]).await;
        Ok(stored)
    }

    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let key = CacheKey::candidate(&candidate.email);
        let stored = self.store.update(candidate).await?;
        self.invalidate(&[CacheKey::AllCandidates, key]).await;
        Ok(stored)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        if self.store.get_by_email(email).await?.is_none() {
            debug!("Delete skipped, no candidate for {}", email);
            return Ok(false);
        }

        let deleted = self.store.delete_by_email(email).await?;
        self.invalidate(&[CacheKey::AllCandidates, CacheKey::candidate(email)])
            .await;
        Ok(deleted)
    }
}
