//! PostgreSQL implementation of the candidate store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Candidate;
use crate::domain::repositories::CandidateStore;
use crate::error::StoreError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "candidates_email_key";

/// Row shape of the `candidates` table.
#[derive(Debug, FromRow)]
struct CandidateRow {
    id: i64,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    preferred_call_time: Option<String>,
    linkedin_profile_url: Option<String>,
    github_profile_url: Option<String>,
    comment: Option<String>,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Self {
            id: Some(row.id),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            preferred_call_time: row.preferred_call_time,
            linkedin_profile_url: row.linkedin_profile_url,
            github_profile_url: row.github_profile_url,
            comment: row.comment,
        }
    }
}

/// Returns true if `e` is a unique violation on the email constraint.
fn is_unique_violation_on_email(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(EMAIL_UNIQUE_CONSTRAINT))
}

/// PostgreSQL store for candidate records.
///
/// Uses SQLx bound parameters for every query; each statement runs in its own
/// implicit transaction, so writes are committed on return.
pub struct PgCandidateStore {
    pool: Arc<PgPool>,
}

impl PgCandidateStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, email, first_name, last_name, phone_number, preferred_call_time,
                   linkedin_profile_url, github_profile_url, comment
            FROM candidates
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, email, first_name, last_name, phone_number, preferred_call_time,
                   linkedin_profile_url, github_profile_url, comment
            FROM candidates
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Candidate::from))
    }

    async fn insert(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            INSERT INTO candidates (
                email, first_name, last_name, phone_number, preferred_call_time,
                linkedin_profile_url, github_profile_url, comment
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, first_name, last_name, phone_number, preferred_call_time,
                      linkedin_profile_url, github_profile_url, comment
            "#,
        )
        .bind(&candidate.email)
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.phone_number)
        .bind(&candidate.preferred_call_time)
        .bind(&candidate.linkedin_profile_url)
        .bind(&candidate.github_profile_url)
        .bind(&candidate.comment)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_email(&e) {
                StoreError::Duplicate {
                    email: candidate.email.clone(),
                }
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            UPDATE candidates
            SET first_name = $2,
                last_name = $3,
                phone_number = $4,
                preferred_call_time = $5,
                linkedin_profile_url = $6,
                github_profile_url = $7,
                comment = $8
            WHERE email = $1
            RETURNING id, email, first_name, last_name, phone_number, preferred_call_time,
                      linkedin_profile_url, github_profile_url, comment
            "#,
        )
        .bind(&candidate.email)
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.phone_number)
        .bind(&candidate.preferred_call_time)
        .bind(&candidate.linkedin_profile_url)
        .bind(&candidate.github_profile_url)
        .bind(&candidate.comment)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Candidate::from).ok_or(StoreError::NotFound {
            email: candidate.email,
        })
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM candidates WHERE email = $1")
            .bind(email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
