//! Cache service trait and key type.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::Candidate;

/// Identifies one entry in the candidate cache.
///
/// The collection entry and the per-candidate entries are independent:
/// invalidating one never touches the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full candidate list.
    AllCandidates,
    /// A single candidate, keyed by email.
    Candidate(String),
}

impl CacheKey {
    pub fn candidate(email: &str) -> Self {
        Self::Candidate(email.to_string())
    }

    /// Metric label for the namespace this key belongs to.
    pub fn entry_label(&self) -> &'static str {
        match self {
            Self::AllCandidates => "list",
            Self::Candidate(_) => "candidate",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AllCandidates => write!(f, "candidates:all"),
            Self::Candidate(email) => write!(f, "candidate:{}", email),
        }
    }
}

/// Process-local cache for candidate reads.
///
/// Entries use sliding expiration: every successful read resets the idle
/// timer, and an entry is dropped once it has been idle for the configured
/// window. Operations are infallible.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - moka-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached candidate list, refreshing its idle timer.
    async fn get_candidates(&self) -> Option<Vec<Candidate>>;

    /// Stores the full candidate list under [`CacheKey::AllCandidates`].
    async fn set_candidates(&self, candidates: &[Candidate]);

    /// Returns the cached candidate for `email`, refreshing its idle timer.
    async fn get_candidate(&self, email: &str) -> Option<Candidate>;

    /// Stores a single candidate under its email key.
    async fn set_candidate(&self, candidate: &Candidate);

    /// Removes an entry. Missing keys are ignored.
    async fn invalidate(&self, key: &CacheKey);

    /// Reports whether a live entry exists without counting as a read.
    ///
    /// Does not reset the idle timer.
    async fn contains(&self, key: &CacheKey) -> bool;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
