//! Job post repository with filtered listing.

use chrono::{DateTime, Utc};
use sqlx::QueryBuilder;

use jobtrack_models::{JobFilter, JobPostWithCompany};

use crate::db::Db;
use crate::error::DbResult;

const SELECT_WITH_COMPANY: &str = "SELECT jp.id, jp.title, jp.description, jp.posted_at, jp.company_id, \
     c.name AS company_name \
     FROM job_posts jp JOIN companies c ON c.id = jp.company_id";

/// Repository for job post rows.
#[derive(Debug, Clone)]
pub struct JobPostRepository {
    db: Db,
}

impl JobPostRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a job post and return its id.
    pub async fn insert(
        &self,
        company_id: i64,
        title: &str,
        description: &str,
        posted_at: DateTime<Utc>,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO job_posts (title, description, posted_at, company_id) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(posted_at)
        .bind(company_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<JobPostWithCompany>> {
        let sql = format!("{SELECT_WITH_COMPANY} WHERE jp.id = ?");
        let job = sqlx::query_as::<_, JobPostWithCompany>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(job)
    }

    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_posts WHERE id = ?")
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count > 0)
    }

    /// Filtered listing: keyword is a case-insensitive substring match on
    /// title or description, dates bound `posted_at` as [start, end).
    /// All filters are conjunctive; results are newest-first.
    pub async fn list_filtered(&self, filter: &JobFilter) -> DbResult<Vec<JobPostWithCompany>> {
        let mut query = QueryBuilder::new(SELECT_WITH_COMPANY);
        query.push(" WHERE 1 = 1");

        if let Some(keyword) = filter.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));
            query.push(" AND (LOWER(jp.title) LIKE ");
            query.push_bind(pattern.clone());
            query.push(" ESCAPE '\\' OR LOWER(jp.description) LIKE ");
            query.push_bind(pattern);
            query.push(" ESCAPE '\\')");
        }

        if let Some(company_id) = filter.company_id {
            query.push(" AND jp.company_id = ");
            query.push_bind(company_id);
        }

        if let Some(start) = filter.start_date {
            query.push(" AND jp.posted_at >= ");
            query.push_bind(start);
        }

        if let Some(end) = filter.end_date {
            query.push(" AND jp.posted_at < ");
            query.push_bind(end);
        }

        query.push(" ORDER BY jp.posted_at DESC");

        let jobs = query
            .build_query_as::<JobPostWithCompany>()
            .fetch_all(self.db.pool())
            .await?;
        Ok(jobs)
    }
}

/// Escape LIKE wildcards so user keywords match literally.
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_rust"), "100\\%\\_rust");
        assert_eq!(escape_like("plain"), "plain");
    }
}
