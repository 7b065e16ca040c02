//! Candidate store implementations.
//!
//! # Stores
//!
//! - [`PgCandidateStore`] - PostgreSQL storage via SQLx
//! - [`MemoryCandidateStore`] - Process-local storage for tests and database-less runs

pub mod memory_candidate_store;
pub mod pg_candidate_store;

pub use memory_candidate_store::MemoryCandidateStore;
pub use pg_candidate_store::PgCandidateStore;
