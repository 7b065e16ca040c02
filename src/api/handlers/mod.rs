//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod candidates;
pub mod health;

pub use candidates::{
    delete_candidate_handler, delete_without_email_handler, get_candidate_handler,
    list_candidates_handler, upsert_candidate_handler,
};
pub use health::health_handler;
