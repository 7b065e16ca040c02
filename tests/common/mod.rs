#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use candidate_hub::api::handlers::health_handler;
use candidate_hub::api::routes::candidate_routes;
use candidate_hub::config::Config;
use candidate_hub::domain::entities::Candidate;
use candidate_hub::domain::repositories::CandidateStore;
use candidate_hub::error::StoreError;
use candidate_hub::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use candidate_hub::infrastructure::persistence::MemoryCandidateStore;
use candidate_hub::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Store wrapper that counts calls reaching the backing store.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryCandidateStore,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub unhealthy: AtomicBool,
}

impl CountingStore {
    pub fn with_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            inner: MemoryCandidateStore::with_candidates(candidates),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateStore for CountingStore {
    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_email(email).await
    }

    async fn insert(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(candidate).await
    }

    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(candidate).await
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_email(email).await
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy.load(Ordering::SeqCst)
    }
}

pub fn candidate(email: &str, first_name: &str, last_name: &str) -> Candidate {
    Candidate {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        ..Candidate::new(email)
    }
}

/// John and Jane, stored with ids 1 and 2.
pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        candidate("john.doe@example.com", "John", "Doe"),
        candidate("jane.smith@example.com", "Jane", "Smith"),
    ]
}

pub fn memory_cache() -> Arc<dyn CacheService> {
    Arc::new(MemoryCache::new(Duration::from_secs(300), 1_000))
}

pub fn create_test_state(store: Arc<CountingStore>) -> AppState {
    AppState::new(store, memory_cache())
}

pub fn create_uncached_state(store: Arc<CountingStore>) -> AppState {
    AppState::new(store, Arc::new(NullCache::new()))
}

/// Candidate routes plus `/health`, without the rate limiter (it needs peer info).
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", candidate_routes())
        .with_state(state)
}

/// In-memory configuration with the given per-IP rate limit.
pub fn test_config(rate_limit_per_second: u64, rate_limit_burst: u32) -> Config {
    Config {
        database_url: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        cache_enabled: true,
        cache_sliding_expiration_seconds: 300,
        cache_max_capacity: 1_000,
        rate_limit_per_second,
        rate_limit_burst,
        db_max_connections: 10,
        db_connect_timeout: 30,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
        db_connect_retries: 0,
    }
}
