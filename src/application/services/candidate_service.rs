//! Candidate create-or-update, lookup and deletion service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::Candidate;
use crate::domain::repositories::CandidateRepository;
use crate::error::AppError;

/// Service for managing candidate profiles.
///
/// Validates input and implements create-or-update on top of a
/// [`CandidateRepository`]. Email is the only identity the service accepts.
pub struct CandidateService<R: CandidateRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CandidateRepository + ?Sized> CandidateService<R> {
    /// Creates a new candidate service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a candidate by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `email` is empty.
    /// Returns [`AppError::NotFound`] if no candidate has this email.
    pub async fn get_candidate(&self, email: &str) -> Result<Candidate, AppError> {
        require_email(email)?;

        self.repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Candidate not found", json!({ "email": email })))
    }

    /// Creates a candidate, or overwrites the profile of the existing one with
    /// the same email.
    ///
    /// On update every profile field is taken from `payload`; fields missing
    /// from the payload are cleared. The stored id is kept and any id on the
    /// payload is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is empty.
    /// Returns [`AppError::Conflict`] if a concurrent insert took the email first.
    pub async fn create_or_update(&self, payload: Candidate) -> Result<Candidate, AppError> {
        require_email(&payload.email)?;

        match self.repository.get_by_email(&payload.email).await? {
            Some(mut existing) => {
                existing.overwrite_profile(payload);
                let updated = self.repository.update(existing).await?;
                info!(email = %updated.email, "Candidate updated");
                Ok(updated)
            }
            None => {
                let created = self
                    .repository
                    .add(Candidate {
                        id: None,
                        ..payload
                    })
                    .await?;
                info!(email = %created.email, id = ?created.id, "Candidate created");
                Ok(created)
            }
        }
    }

    /// Deletes a candidate by email.
    ///
    /// Returns whether a candidate was removed; unknown emails are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `email` is empty.
    pub async fn delete_candidate(&self, email: &str) -> Result<bool, AppError> {
        require_email(email)?;

        let deleted = self.repository.delete_by_email(email).await?;
        if deleted {
            info!(email, "Candidate deleted");
        }
        Ok(deleted)
    }
}

fn require_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::bad_request(
            "Email is required",
            json!({ "field": "email" }),
        ));
    }
    Ok(())
}
