//! Repository trait consumed by the application layer.

use crate::domain::entities::Candidate;
use crate::error::StoreError;
use async_trait::async_trait;

/// Candidate data access as seen by services.
///
/// Same shape as [`super::CandidateStore`] but implementations are free to
/// serve reads from a cache. Store failures are propagated as-is.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::CachedCandidateRepository`] - Read-through cache over a store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Returns all candidates.
    async fn list_all(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Finds a candidate by email, `Ok(None)` if absent.
    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError>;

    /// Persists a new candidate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the email is already taken.
    async fn add(&self, candidate: Candidate) -> Result<Candidate, StoreError>;

    /// Replaces the profile of an existing candidate, matched by email.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no candidate has this email.
    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError>;

    /// Deletes a candidate by email.
    ///
    /// Deleting an unknown email is a no-op and returns `Ok(false)`.
    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError>;
}
