//! API route configuration.

use crate::api::handlers::{
    delete_candidate_handler, delete_without_email_handler, get_candidate_handler,
    list_candidates_handler, upsert_candidate_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Candidate routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /candidates`          - List all candidates
/// - `POST   /candidates`          - Create or update a candidate
/// - `DELETE /candidates`          - Rejected with 400 (email missing)
/// - `GET    /candidates/{email}`  - Get a candidate by email
/// - `DELETE /candidates/{email}`  - Delete a candidate by email
pub fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/candidates",
            get(list_candidates_handler)
                .post(upsert_candidate_handler)
                .delete(delete_without_email_handler),
        )
        .route(
            "/candidates/{email}",
            get(get_candidate_handler).delete(delete_candidate_handler),
        )
}
