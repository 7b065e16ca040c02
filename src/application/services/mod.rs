//! Business logic services for the application layer.

pub mod candidate_service;

pub use candidate_service::CandidateService;
