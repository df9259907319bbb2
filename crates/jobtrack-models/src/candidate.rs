//! Candidate entity and transfer objects.
//!
//! A candidate profile is keyed both by its own primary key and by the
//! identity-user id issued by the auth system; the two are distinct and
//! exactly one profile may exist per identity user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Candidate row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    /// Subject identifier from the token issuer, unique per profile.
    pub identity_user_id: String,
    pub full_name: String,
    pub email: String,
}

/// Candidate shape returned across the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDto {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub identity_user_id: String,
}

impl From<Candidate> for CandidateDto {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            full_name: candidate.full_name,
            email: candidate.email,
            identity_user_id: candidate.identity_user_id,
        }
    }
}

/// Request body for creating a candidate profile.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub full_name: String,
    #[validate(email(message = "must be a valid email address"))]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn profile_fields_are_validated() {
        let ok = CreateCandidate {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = CreateCandidate {
            full_name: "Ada Lovelace".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
