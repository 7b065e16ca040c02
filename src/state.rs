//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CandidateService;
use crate::domain::repositories::{CandidateRepository, CandidateStore};
use crate::infrastructure::cache::{CacheService, CachedCandidateRepository};

/// Candidate service over a type-erased repository.
pub type DynCandidateService = CandidateService<dyn CandidateRepository>;

/// Application state shared across requests.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub candidate_service: Arc<DynCandidateService>,
    pub store: Arc<dyn CandidateStore>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the cached repository and the candidate service over `store` and `cache`.
    pub fn new(store: Arc<dyn CandidateStore>, cache: Arc<dyn CacheService>) -> Self {
        let repository: Arc<dyn CandidateRepository> =
            Arc::new(CachedCandidateRepository::new(store.clone(), cache.clone()));

        Self {
            candidate_service: Arc::new(CandidateService::new(repository)),
            store,
            cache,
        }
    }
}
