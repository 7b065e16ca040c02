//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures independent of storage and transport.
//!
//! # Entity Types
//!
//! - [`Candidate`] - A candidate contact profile keyed by email

pub mod candidate;

pub use candidate::Candidate;
