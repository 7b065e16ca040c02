//! DTOs for the candidate endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Candidate;

/// Request body for `POST /api/candidates`.
///
/// Field names follow the public JSON contract (camelCase). `id` is accepted
/// for symmetry with responses but ignored: the store owns surrogate ids.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    pub id: Option<i64>,

    /// Natural key of the candidate. Required and non-empty.
    #[validate(
        required(message = "Email is required"),
        length(min = 1, message = "Email is required")
    )]
    pub email: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,

    /// Time interval when it's better to call.
    pub preferred_call_time: Option<String>,

    #[serde(rename = "linkedInProfileUrl")]
    pub linkedin_profile_url: Option<String>,

    #[serde(rename = "gitHubProfileUrl")]
    pub github_profile_url: Option<String>,

    pub comment: Option<String>,
}

impl From<CandidateRequest> for Candidate {
    fn from(req: CandidateRequest) -> Self {
        Self {
            id: req.id,
            email: req.email.unwrap_or_default(),
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            preferred_call_time: req.preferred_call_time,
            linkedin_profile_url: req.linkedin_profile_url,
            github_profile_url: req.github_profile_url,
            comment: req.comment,
        }
    }
}

/// JSON representation of a stored candidate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
    pub preferred_call_time: Option<String>,
    #[serde(rename = "linkedInProfileUrl")]
    pub linkedin_profile_url: Option<String>,
    #[serde(rename = "gitHubProfileUrl")]
    pub github_profile_url: Option<String>,
    pub comment: Option<String>,
}

impl From<Candidate> for CandidateResponse {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            phone_number: c.phone_number,
            email: c.email,
            preferred_call_time: c.preferred_call_time,
            linkedin_profile_url: c.linkedin_profile_url,
            github_profile_url: c.github_profile_url,
            comment: c.comment,
        }
    }
}
