//! Company repository.

use jobtrack_models::Company;

use crate::db::Db;
use crate::error::DbResult;

/// Repository for company rows.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: Db,
}

impl CompanyRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a company and return its id.
    pub async fn insert(&self, name: &str) -> DbResult<i64> {
        let result = sqlx::query("INSERT INTO companies (name) VALUES (?)")
            .bind(name)
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>("SELECT id, name FROM companies WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(company)
    }

    pub async fn get_all(&self) -> DbResult<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>("SELECT id, name FROM companies ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(companies)
    }

    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE id = ?")
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count > 0)
    }
}
