//! Job application repository.
//!
//! All read paths join the candidate, job post, and company rows so the
//! service layer can enrich responses without extra round trips.

use chrono::{DateTime, Utc};

use jobtrack_models::ApplicationDetails;

use crate::db::Db;
use crate::error::DbResult;

const SELECT_DETAILS: &str = "SELECT ja.id, ja.candidate_id, ja.job_post_id, ja.resume_url, ja.applied_at, \
     ca.full_name AS candidate_name, jp.title AS job_title, co.name AS company_name \
     FROM job_applications ja \
     JOIN candidates ca ON ca.id = ja.candidate_id \
     JOIN job_posts jp ON jp.id = ja.job_post_id \
     JOIN companies co ON co.id = jp.company_id";

/// Repository for job application rows.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    db: Db,
}

impl ApplicationRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert an application and return its id. The composite unique
    /// constraint on (candidate_id, job_post_id) rejects duplicates
    /// that race past the service pre-check.
    pub async fn insert(
        &self,
        candidate_id: i64,
        job_post_id: i64,
        resume_url: &str,
        applied_at: DateTime<Utc>,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO job_applications (candidate_id, job_post_id, resume_url, applied_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(candidate_id)
        .bind(job_post_id)
        .bind(resume_url)
        .bind(applied_at)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_details(&self, id: i64) -> DbResult<Option<ApplicationDetails>> {
        let sql = format!("{SELECT_DETAILS} WHERE ja.id = ?");
        let details = sqlx::query_as::<_, ApplicationDetails>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(details)
    }

    /// Applications for one job post, newest first.
    pub async fn list_by_job(&self, job_post_id: i64) -> DbResult<Vec<ApplicationDetails>> {
        let sql = format!("{SELECT_DETAILS} WHERE ja.job_post_id = ? ORDER BY ja.applied_at DESC, ja.id DESC");
        let applications = sqlx::query_as::<_, ApplicationDetails>(&sql)
            .bind(job_post_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(applications)
    }

    /// Applications submitted by one candidate, newest first.
    pub async fn list_by_candidate(&self, candidate_id: i64) -> DbResult<Vec<ApplicationDetails>> {
        let sql = format!("{SELECT_DETAILS} WHERE ja.candidate_id = ? ORDER BY ja.applied_at DESC, ja.id DESC");
        let applications = sqlx::query_as::<_, ApplicationDetails>(&sql)
            .bind(candidate_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(applications)
    }

    pub async fn has_applied(&self, candidate_id: i64, job_post_id: i64) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM job_applications WHERE candidate_id = ? AND job_post_id = ?",
        )
        .bind(candidate_id)
        .bind(job_post_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count > 0)
    }
}
