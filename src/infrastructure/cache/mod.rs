//! In-process caching layer for candidate reads.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - moka cache with sliding expiration
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! [`CachedCandidateRepository`] wraps any candidate store with a
//! [`CacheService`] and owns the cache/store consistency rules.

mod cached_candidate_repository;
mod memory_cache;
mod null_cache;
mod service;

pub use cached_candidate_repository::CachedCandidateRepository;
pub use memory_cache::{DEFAULT_MAX_CAPACITY, DEFAULT_SLIDING_EXPIRATION, MemoryCache};
pub use null_cache::NullCache;
pub use service::{CacheKey, CacheService};
