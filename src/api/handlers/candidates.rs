//! Handlers for candidate endpoints (list, lookup, create-or-update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::candidate::{CandidateRequest, CandidateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all candidates.
///
/// # Endpoint
///
/// `GET /api/candidates`
///
/// Served from the cache while the collection entry is live.
pub async fn list_candidates_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateResponse>>, AppError> {
    let candidates = state.candidate_service.list_candidates().await?;

    Ok(Json(
        candidates.into_iter().map(CandidateResponse::from).collect(),
    ))
}

/// Returns a single candidate by email.
///
/// # Endpoint
///
/// `GET /api/candidates/{email}`
///
/// # Errors
///
/// Returns 404 Not Found if no candidate has this email.
pub async fn get_candidate_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CandidateResponse>, AppError> {
    let candidate = state.candidate_service.get_candidate(&email).await?;
    Ok(Json(candidate.into()))
}

/// Creates a candidate or overwrites the existing one with the same email.
///
/// # Endpoint
///
/// `POST /api/candidates`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "John",
///   "lastName": "Doe",
///   "phoneNumber": "1234567890",
///   "email": "john.doe@example.com",
///   "preferredCallTime": "Morning",
///   "linkedInProfileUrl": "https://www.linkedin.com/in/johndoe",
///   "gitHubProfileUrl": "https://github.com/johndoe",
///   "comment": "Sample comment"
/// }
/// ```
///
/// Every field except `email` is optional. On update, omitted fields are
/// cleared rather than preserved.
///
/// # Errors
///
/// Returns 400 Bad Request if `email` is missing or empty.
pub async fn upsert_candidate_handler(
    State(state): State<AppState>,
    Json(payload): Json<CandidateRequest>,
) -> Result<Json<CandidateResponse>, AppError> {
    payload.validate()?;

    let candidate = state
        .candidate_service
        .create_or_update(payload.into())
        .await?;

    Ok(Json(candidate.into()))
}

/// Deletes a candidate by email.
///
/// # Endpoint
///
/// `DELETE /api/candidates/{email}`
///
/// Responds 204 No Content whether or not the candidate existed.
pub async fn delete_candidate_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.candidate_service.delete_candidate(&email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Rejects `DELETE /api/candidates` where the email path segment is empty.
pub async fn delete_without_email_handler() -> AppError {
    AppError::bad_request("Email is required", json!({ "field": "email" }))
}
