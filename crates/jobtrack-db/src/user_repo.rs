//! User account and role repository for the auth collaborator tables.

use chrono::{DateTime, Utc};

use jobtrack_models::UserAccount;

use crate::db::Db;
use crate::error::DbResult;

/// Repository for user accounts and role assignments.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Db,
}

impl UserRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        id: &str,
        email: &str,
        password_hash: &str,
        created_at: DateTime<Utc>,
    ) -> DbResult<()> {
        sqlx::query("INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(email)
            .bind(password_hash)
            .bind(created_at)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<UserAccount>> {
        let user = sqlx::query_as::<_, UserAccount>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(user)
    }

    /// Create a role if it does not exist yet.
    pub async fn ensure_role(&self, role: &str) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(role)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    pub async fn role_exists(&self, role: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE name = ?")
            .bind(role)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count > 0)
    }

    pub async fn assign_role(&self, user_id: &str, role: &str) -> DbResult<()> {
        sqlx::query("INSERT OR IGNORE INTO user_roles (user_id, role) VALUES (?, ?)")
            .bind(user_id)
            .bind(role)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    pub async fn roles_for_user(&self, user_id: &str) -> DbResult<Vec<String>> {
        let roles: Vec<String> =
            sqlx::query_scalar("SELECT role FROM user_roles WHERE user_id = ? ORDER BY role")
                .bind(user_id)
                .fetch_all(self.db.pool())
                .await?;
        Ok(roles)
    }
}
