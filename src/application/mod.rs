//! Application layer services implementing business logic.
//!
//! Services consume repository traits, validate input and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::candidate_service::CandidateService`] - Candidate create-or-update, lookup, deletion

pub mod services;
