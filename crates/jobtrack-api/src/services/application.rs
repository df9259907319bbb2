//! Application submission service — the invariant-bearing core.

use chrono::Utc;
use tracing::info;

use jobtrack_db::{ApplicationRepository, CandidateRepository, Db, DbError, JobPostRepository};
use jobtrack_models::{ApplicationDto, Candidate, CreateApplication};

use crate::error::{ApiError, ApiResult};

/// Service enforcing the one-application-per-candidate-per-job invariant
/// and the profile/job existence preconditions.
#[derive(Clone)]
pub struct ApplicationService {
    applications: ApplicationRepository,
    candidates: CandidateRepository,
    jobs: JobPostRepository,
}

impl ApplicationService {
    pub fn new(db: Db) -> Self {
        Self {
            applications: ApplicationRepository::new(db.clone()),
            candidates: CandidateRepository::new(db.clone()),
            jobs: JobPostRepository::new(db),
        }
    }

    /// Submit an application on behalf of the calling identity user.
    ///
    /// Precondition order matters: resolve the candidate profile, then
    /// the job post, then the duplicate check. The duplicate pre-check
    /// is best-effort; the composite unique constraint decides races,
    /// and its violation is reported as the same conflict.
    pub async fn submit(
        &self,
        identity_user_id: &str,
        dto: CreateApplication,
    ) -> ApiResult<ApplicationDto> {
        let candidate = self
            .candidates
            .get_by_identity_user(identity_user_id)
            .await?
            .ok_or_else(|| {
                ApiError::not_found(format!(
                    "No candidate profile found for user {identity_user_id}."
                ))
            })?;

        if !self.jobs.exists(dto.job_post_id).await? {
            return Err(ApiError::not_found(format!("JobPost id={}", dto.job_post_id)));
        }

        if self
            .applications
            .has_applied(candidate.id, dto.job_post_id)
            .await?
        {
            return Err(duplicate_application(&candidate, dto.job_post_id));
        }

        let applied_at = Utc::now();
        let id = self
            .applications
            .insert(candidate.id, dto.job_post_id, &dto.resume_url, applied_at)
            .await
            .map_err(|e| match e {
                DbError::UniqueViolation(_) => duplicate_application(&candidate, dto.job_post_id),
                other => other.into(),
            })?;

        info!(
            application_id = id,
            candidate_id = candidate.id,
            job_post_id = dto.job_post_id,
            "application submitted"
        );

        // Re-fetch with candidate and job post context for enrichment.
        let details = self
            .applications
            .get_details(id)
            .await?
            .ok_or_else(|| ApiError::internal(format!("application {id} vanished after insert")))?;
        Ok(details.into())
    }

    /// Applications for one job post, newest first, with candidate names.
    pub async fn list_for_job(&self, job_post_id: i64) -> ApiResult<Vec<ApplicationDto>> {
        let applications = self.applications.list_by_job(job_post_id).await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    /// Applications submitted by the calling identity user, newest
    /// first. A missing profile is an empty list, not an error.
    pub async fn list_for_candidate(&self, identity_user_id: &str) -> ApiResult<Vec<ApplicationDto>> {
        let Some(candidate) = self
            .candidates
            .get_by_identity_user(identity_user_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        let applications = self.applications.list_by_candidate(candidate.id).await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<ApplicationDto>> {
        Ok(self.applications.get_details(id).await?.map(Into::into))
    }
}

fn duplicate_application(candidate: &Candidate, job_post_id: i64) -> ApiError {
    ApiError::conflict(format!(
        "Candidate {} has already applied for Job Post {}.",
        candidate.id, job_post_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_db::CompanyRepository;

    async fn test_db() -> Db {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    async fn seed_job(db: &Db) -> i64 {
        let company_id = CompanyRepository::new(db.clone())
            .insert("Acme")
            .await
            .unwrap();
        JobPostRepository::new(db.clone())
            .insert(company_id, "Backend Engineer", "Rust services", Utc::now())
            .await
            .unwrap()
    }

    fn application_for(job_post_id: i64) -> CreateApplication {
        CreateApplication {
            job_post_id,
            resume_url: "https://cdn.example.com/r.pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_requires_a_candidate_profile() {
        let db = test_db().await;
        let job_id = seed_job(&db).await;
        let service = ApplicationService::new(db);

        let err = service
            .submit("user-without-profile", application_for(job_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn submit_requires_an_existing_job_post() {
        let db = test_db().await;
        CandidateRepository::new(db.clone())
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let service = ApplicationService::new(db);

        let err = service.submit("user-1", application_for(999)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn second_submission_for_same_job_is_a_conflict() {
        let db = test_db().await;
        let job_id = seed_job(&db).await;
        CandidateRepository::new(db.clone())
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let service = ApplicationService::new(db);

        let first = service.submit("user-1", application_for(job_id)).await.unwrap();
        assert_eq!(first.candidate_name, "Ada Lovelace");
        assert_eq!(first.job_title, "Backend Engineer");

        let err = service.submit("user-1", application_for(job_id)).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // First submission unchanged.
        let kept = service.get_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(kept.resume_url, first.resume_url);
    }

    #[tokio::test]
    async fn missing_profile_lists_as_empty_not_error() {
        let db = test_db().await;
        let service = ApplicationService::new(db);
        let list = service.list_for_candidate("nobody").await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn listings_are_newest_first() {
        let db = test_db().await;
        let company_id = CompanyRepository::new(db.clone())
            .insert("Acme")
            .await
            .unwrap();
        let jobs = JobPostRepository::new(db.clone());
        let job_a = jobs
            .insert(company_id, "Role A", "d", Utc::now())
            .await
            .unwrap();
        let job_b = jobs
            .insert(company_id, "Role B", "d", Utc::now())
            .await
            .unwrap();
        CandidateRepository::new(db.clone())
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let service = ApplicationService::new(db);

        service.submit("user-1", application_for(job_a)).await.unwrap();
        service.submit("user-1", application_for(job_b)).await.unwrap();

        let mine = service.list_for_candidate("user-1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].applied_at >= mine[1].applied_at);
        assert_eq!(mine[0].job_title, "Role B");
        assert_eq!(mine[0].company_name, "Acme");
    }
}
