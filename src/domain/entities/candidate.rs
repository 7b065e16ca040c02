//! Candidate entity representing a job candidate's contact profile.

/// A candidate profile keyed by email.
///
/// `email` is the natural key used for every lookup, update and delete.
/// `id` is a surrogate key assigned by the store on insert and is `None`
/// for candidates that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub preferred_call_time: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub comment: Option<String>,
}

impl Candidate {
    /// Creates an unsaved candidate with only the email set.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            first_name: None,
            last_name: None,
            phone_number: None,
            preferred_call_time: None,
            linkedin_profile_url: None,
            github_profile_url: None,
            comment: None,
        }
    }

    /// Overwrites every profile field with the values from `payload`.
    ///
    /// `id` and `email` are left untouched. This is a full overwrite, not a
    /// patch: a `None` in `payload` clears the corresponding field.
    pub fn overwrite_profile(&mut self, payload: Candidate) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.phone_number = payload.phone_number;
        self.preferred_call_time = payload.preferred_call_time;
        self.linkedin_profile_url = payload.linkedin_profile_url;
        self.github_profile_url = payload.github_profile_url;
        self.comment = payload.comment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Candidate {
        Candidate {
            id: Some(7),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            phone_number: Some("1234567890".to_string()),
            preferred_call_time: Some("Morning".to_string()),
            linkedin_profile_url: Some("https://www.linkedin.com/in/johndoe".to_string()),
            github_profile_url: Some("https://github.com/johndoe".to_string()),
            comment: Some("Sample comment".to_string()),
            ..Candidate::new("john.doe@example.com")
        }
    }

    #[test]
    fn test_candidate_new() {
        let candidate = Candidate::new("alice.smith@example.com");

        assert_eq!(candidate.email, "alice.smith@example.com");
        assert!(candidate.id.is_none());
        assert!(candidate.first_name.is_none());
        assert!(candidate.comment.is_none());
    }

    #[test]
    fn test_overwrite_profile_keeps_identity() {
        let mut existing = john();
        let payload = Candidate {
            id: Some(99),
            first_name: Some("Johnny".to_string()),
            ..Candidate::new("someone.else@example.com")
        };

        existing.overwrite_profile(payload);

        assert_eq!(existing.id, Some(7));
        assert_eq!(existing.email, "john.doe@example.com");
        assert_eq!(existing.first_name.as_deref(), Some("Johnny"));
    }

    #[test]
    fn test_overwrite_profile_clears_missing_fields() {
        let mut existing = john();

        existing.overwrite_profile(Candidate::new("john.doe@example.com"));

        assert!(existing.first_name.is_none());
        assert!(existing.last_name.is_none());
        assert!(existing.phone_number.is_none());
        assert!(existing.preferred_call_time.is_none());
        assert!(existing.linkedin_profile_url.is_none());
        assert!(existing.github_profile_url.is_none());
        assert!(existing.comment.is_none());
        assert!(existing.id.is_some());
    }
}
