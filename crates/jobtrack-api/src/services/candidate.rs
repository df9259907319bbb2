//! Candidate profile service.

use tracing::info;

use jobtrack_db::{CandidateRepository, Db, DbError};
use jobtrack_models::{CandidateDto, CreateCandidate};

use crate::error::{ApiError, ApiResult};

/// Service enforcing the one-profile-per-identity invariant.
#[derive(Clone)]
pub struct CandidateService {
    candidates: CandidateRepository,
}

impl CandidateService {
    pub fn new(db: Db) -> Self {
        Self {
            candidates: CandidateRepository::new(db),
        }
    }

    /// Create the profile for an identity user. The existence pre-check
    /// gives the friendly conflict message; the unique index on
    /// `identity_user_id` is what actually holds under concurrent
    /// requests, and a constraint hit is reported as the same conflict.
    pub async fn create_profile(
        &self,
        identity_user_id: &str,
        dto: CreateCandidate,
    ) -> ApiResult<CandidateDto> {
        if self
            .candidates
            .exists_for_identity_user(identity_user_id)
            .await?
        {
            return Err(ApiError::conflict(format!(
                "Candidate profile already exists for user {identity_user_id}."
            )));
        }

        let id = self
            .candidates
            .insert(identity_user_id, &dto.full_name, &dto.email)
            .await
            .map_err(|e| match e {
                DbError::UniqueViolation(_) => ApiError::conflict(format!(
                    "Candidate profile already exists for user {identity_user_id}."
                )),
                other => other.into(),
            })?;

        info!(candidate_id = id, identity_user_id, "candidate profile created");

        Ok(CandidateDto {
            id,
            full_name: dto.full_name,
            email: dto.email,
            identity_user_id: identity_user_id.to_string(),
        })
    }

    pub async fn get_by_identity_user(
        &self,
        identity_user_id: &str,
    ) -> ApiResult<Option<CandidateDto>> {
        Ok(self
            .candidates
            .get_by_identity_user(identity_user_id)
            .await?
            .map(Into::into))
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<CandidateDto>> {
        Ok(self.candidates.get_by_id(id).await?.map(Into::into))
    }
}
