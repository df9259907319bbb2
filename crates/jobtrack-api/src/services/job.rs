//! Job post service.

use chrono::Utc;
use tracing::info;

use jobtrack_db::{CompanyRepository, Db, JobPostRepository};
use jobtrack_models::{CreateJobPost, JobFilter, JobPostDto};

use crate::error::{ApiError, ApiResult};

/// Service for posting and listing jobs.
#[derive(Clone)]
pub struct JobService {
    jobs: JobPostRepository,
    companies: CompanyRepository,
}

impl JobService {
    pub fn new(db: Db) -> Self {
        Self {
            jobs: JobPostRepository::new(db.clone()),
            companies: CompanyRepository::new(db),
        }
    }

    /// Create a job post under an existing company. The returned DTO
    /// carries the denormalized company name, resolved by re-reading the
    /// persisted row after the insert.
    pub async fn create_job_post(&self, company_id: i64, dto: CreateJobPost) -> ApiResult<JobPostDto> {
        if !self.companies.exists(company_id).await? {
            return Err(ApiError::not_found(format!("Company id={company_id}")));
        }

        let posted_at = Utc::now();
        let id = self
            .jobs
            .insert(company_id, &dto.title, &dto.description, posted_at)
            .await?;

        info!(job_post_id = id, company_id, "job post created");

        let job = self
            .jobs
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::internal(format!("job post {id} vanished after insert")))?;
        Ok(job.into())
    }

    /// Filtered public listing, newest first.
    pub async fn list_jobs(&self, filter: JobFilter) -> ApiResult<Vec<JobPostDto>> {
        let jobs = self.jobs.list_filtered(&filter).await?;
        Ok(jobs.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<JobPostDto>> {
        Ok(self.jobs.get_by_id(id).await?.map(Into::into))
    }
}
