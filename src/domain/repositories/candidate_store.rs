//! Storage trait for durable candidate persistence.

use crate::domain::entities::Candidate;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable persistence for candidate records, keyed by email.
///
/// Every operation is committed when it returns. Implementations report
/// failures as [`StoreError`] and never retry on their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCandidateStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCandidateStore`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Returns every stored candidate ordered by surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on backend failures.
    async fn list(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Finds a candidate by exact email match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Candidate))` if found
    /// - `Ok(None)` if not found
    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError>;

    /// Inserts a new candidate and returns it with its assigned id.
    ///
    /// Any `id` already present on `candidate` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if a record with the same email exists.
    async fn insert(&self, candidate: Candidate) -> Result<Candidate, StoreError>;

    /// Replaces all non-key fields of the record matching `candidate.email`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this email.
    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError>;

    /// Removes the record with this email.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> bool;
}
