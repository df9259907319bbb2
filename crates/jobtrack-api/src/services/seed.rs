//! Startup seeding: roles, the admin account, and development sample data.

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use jobtrack_db::{CompanyRepository, Db, JobPostRepository, UserRepository};
use jobtrack_models::Role;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

const ADMIN_EMAIL: &str = "admin@jobtrack.local";
const DEV_ADMIN_PASSWORD: &str = "Admin#12345";

/// Idempotent startup seeder. Failures are logged and skipped so a
/// partially seeded database never blocks the server from starting.
pub struct Seeder {
    db: Db,
    config: ApiConfig,
}

impl Seeder {
    pub fn new(db: Db, config: ApiConfig) -> Self {
        Self { db, config }
    }

    /// Run all seeding steps, best effort.
    pub async fn run(&self) {
        if let Err(e) = self.seed_roles().await {
            error!(error = %e, "role seeding failed");
        }
        if let Err(e) = self.seed_admin().await {
            error!(error = %e, "admin seeding failed");
        }
        if !self.config.is_production() {
            if let Err(e) = self.seed_sample_data().await {
                error!(error = %e, "sample data seeding failed");
            }
        }
    }

    async fn seed_roles(&self) -> ApiResult<()> {
        let users = UserRepository::new(self.db.clone());
        for role in Role::ALL {
            users.ensure_role(role.as_str()).await?;
        }
        info!("roles seeded");
        Ok(())
    }

    /// Create the admin account. The password comes from
    /// SEED_ADMIN_PASSWORD; in production a missing value skips the step
    /// rather than shipping a known default.
    async fn seed_admin(&self) -> ApiResult<()> {
        let users = UserRepository::new(self.db.clone());
        if users.find_by_email(ADMIN_EMAIL).await?.is_some() {
            return Ok(());
        }

        let password = match std::env::var("SEED_ADMIN_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ if self.config.is_production() => {
                warn!("SEED_ADMIN_PASSWORD not set, skipping admin seeding");
                return Ok(());
            }
            _ => {
                warn!("SEED_ADMIN_PASSWORD not set, using the development default");
                DEV_ADMIN_PASSWORD.to_string()
            }
        };

        let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))?;
        let user_id = Uuid::new_v4().to_string();
        users.insert(&user_id, ADMIN_EMAIL, &hash, Utc::now()).await?;
        users.assign_role(&user_id, Role::Admin.as_str()).await?;

        info!(email = ADMIN_EMAIL, "admin account seeded");
        Ok(())
    }

    /// A couple of companies with open positions so a fresh development
    /// database has something to list. Skipped once companies exist.
    async fn seed_sample_data(&self) -> ApiResult<()> {
        let companies = CompanyRepository::new(self.db.clone());
        if !companies.get_all().await?.is_empty() {
            return Ok(());
        }

        let jobs = JobPostRepository::new(self.db.clone());
        let samples = [
            (
                "Initech",
                vec![
                    ("Backend Engineer", "Build and operate HTTP services."),
                    ("Data Engineer", "Own the reporting pipelines."),
                ],
            ),
            (
                "Globex",
                vec![("Platform Engineer", "Keep the build and deploy fleet healthy.")],
            ),
        ];

        for (name, postings) in samples {
            let company_id = companies.insert(name).await?;
            for (title, description) in postings {
                jobs.insert(company_id, title, description, Utc::now()).await?;
            }
        }

        info!("sample companies and job posts seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeder() -> Seeder {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        Seeder::new(db, ApiConfig::default())
    }

    #[tokio::test]
    async fn run_is_idempotent() {
        let s = seeder().await;
        s.run().await;
        s.run().await;

        let users = UserRepository::new(s.db.clone());
        for role in Role::ALL {
            assert!(users.role_exists(role.as_str()).await.unwrap());
        }
        let admin = users.find_by_email(ADMIN_EMAIL).await.unwrap().unwrap();
        assert_eq!(
            users.roles_for_user(&admin.id).await.unwrap(),
            vec!["Admin".to_string()]
        );

        let companies = CompanyRepository::new(s.db.clone())
            .get_all()
            .await
            .unwrap();
        assert_eq!(companies.len(), 2);
    }

    #[tokio::test]
    async fn production_without_password_skips_admin() {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        let config = ApiConfig {
            environment: "production".to_string(),
            ..ApiConfig::default()
        };
        let s = Seeder::new(db, config);
        s.run().await;

        let users = UserRepository::new(s.db.clone());
        assert!(users.find_by_email(ADMIN_EMAIL).await.unwrap().is_none());
        // Roles are still created.
        assert!(users.role_exists("Candidate").await.unwrap());
    }
}
