//! Repository trait definitions for the domain layer.
//!
//! Two layers of data access are defined here:
//!
//! - [`CandidateStore`] - Durable persistence (PostgreSQL or in-memory)
//! - [`CandidateRepository`] - What services call; the production implementation
//!   puts a read-through cache in front of a store
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod candidate_repository;
pub mod candidate_store;

pub use candidate_repository::CandidateRepository;
pub use candidate_store::CandidateStore;

#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
#[cfg(test)]
pub use candidate_store::MockCandidateStore;
