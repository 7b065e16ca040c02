//! Process-local candidate store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Candidate;
use crate::domain::repositories::CandidateStore;
use crate::error::StoreError;

#[derive(Default)]
struct Rows {
    by_email: HashMap<String, Candidate>,
    next_id: i64,
}

/// In-memory candidate store.
///
/// Used when no database is configured and as a test double. Data lives only
/// as long as the process; ids are assigned sequentially from 1.
#[derive(Default)]
pub struct MemoryCandidateStore {
    rows: RwLock<Rows>,
}

impl MemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `candidates`.
    pub fn with_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let mut rows = Rows::default();
        for mut candidate in candidates {
            rows.next_id += 1;
            candidate.id = Some(rows.next_id);
            rows.by_email.insert(candidate.email.clone(), candidate);
        }

        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let rows = self.rows.read().await;
        let mut candidates: Vec<Candidate> = rows.by_email.values().cloned().collect();
        candidates.sort_by_key(|c| c.id);
        Ok(candidates)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        Ok(self.rows.read().await.by_email.get(email).cloned())
    }

    async fn insert(&self, mut candidate: Candidate) -> Result<Candidate, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.by_email.contains_key(&candidate.email) {
            return Err(StoreError::Duplicate {
                email: candidate.email,
            });
        }

        rows.next_id += 1;
        candidate.id = Some(rows.next_id);
        rows.by_email
            .insert(candidate.email.clone(), candidate.clone());

        Ok(candidate)
    }

    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(existing) = rows.by_email.get_mut(&candidate.email) else {
            return Err(StoreError::NotFound {
                email: candidate.email,
            });
        };

        existing.overwrite_profile(candidate);
        Ok(existing.clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.by_email.remove(email).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
