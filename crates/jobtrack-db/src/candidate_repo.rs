//! Candidate repository, keyed by id and by identity-user id.

use jobtrack_models::Candidate;

use crate::db::Db;
use crate::error::DbResult;

/// Repository for candidate rows.
#[derive(Debug, Clone)]
pub struct CandidateRepository {
    db: Db,
}

impl CandidateRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a profile and return its id. The unique index on
    /// `identity_user_id` rejects a second profile for the same user.
    pub async fn insert(
        &self,
        identity_user_id: &str,
        full_name: &str,
        email: &str,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO candidates (identity_user_id, full_name, email) VALUES (?, ?, ?)",
        )
        .bind(identity_user_id)
        .bind(full_name)
        .bind(email)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            "SELECT id, identity_user_id, full_name, email FROM candidates WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(candidate)
    }

    pub async fn get_by_identity_user(&self, identity_user_id: &str) -> DbResult<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            "SELECT id, identity_user_id, full_name, email FROM candidates WHERE identity_user_id = ?",
        )
        .bind(identity_user_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(candidate)
    }

    pub async fn exists_for_identity_user(&self, identity_user_id: &str) -> DbResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM candidates WHERE identity_user_id = ?")
                .bind(identity_user_id)
                .fetch_one(self.db.pool())
                .await?;
        Ok(count > 0)
    }
}
