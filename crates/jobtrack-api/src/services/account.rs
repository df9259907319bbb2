//! User account service: registration and credential login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use jobtrack_db::{Db, DbError, UserRepository};
use jobtrack_models::Role;

use crate::auth::issue_token;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expiration: DateTime<Utc>,
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Service over the identity tables: bcrypt-hashed credentials and
/// role-claim token issuance.
#[derive(Clone)]
pub struct AccountService {
    users: UserRepository,
    config: ApiConfig,
}

impl AccountService {
    pub fn new(db: Db, config: ApiConfig) -> Self {
        Self {
            users: UserRepository::new(db),
            config,
        }
    }

    /// Register a new user and grant the default Candidate role when it
    /// has been seeded.
    pub async fn register(&self, dto: RegisterUser) -> ApiResult<()> {
        if self.users.find_by_email(&dto.email).await?.is_some() {
            return Err(ApiError::bad_request("User exists."));
        }

        let hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))?;

        let user_id = Uuid::new_v4().to_string();
        self.users
            .insert(&user_id, &dto.email, &hash, Utc::now())
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                DbError::UniqueViolation(_) => ApiError::bad_request("User exists."),
                other => other.into(),
            })?;

        if self.users.role_exists(Role::Candidate.as_str()).await? {
            self.users
                .assign_role(&user_id, Role::Candidate.as_str())
                .await?;
        }

        info!(user_id, "user registered");
        Ok(())
    }

    /// Verify credentials and issue an access token.
    pub async fn login(&self, dto: LoginUser) -> ApiResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid credentials."))?;

        let matches = bcrypt::verify(&dto.password, &user.password_hash)
            .map_err(|e| ApiError::internal(format!("Failed to verify password: {e}")))?;
        if !matches {
            return Err(ApiError::unauthorized("Invalid credentials."));
        }

        let roles = self.users.roles_for_user(&user.id).await?;
        let (token, expiration) = issue_token(&self.config, &user.id, &user.email, &roles)?;

        Ok(AuthResponse {
            token,
            expiration,
            user_id: user.id,
            email: user.email,
            roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> AccountService {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        let users = UserRepository::new(db.clone());
        users.ensure_role(Role::Candidate.as_str()).await.unwrap();
        AccountService::new(db, ApiConfig::default())
    }

    fn register_dto() -> RegisterUser {
        RegisterUser {
            email: "ada@example.com".to_string(),
            password: "correct horse battery".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_issues_candidate_token() {
        let service = test_service().await;
        service.register(register_dto()).await.unwrap();

        let response = service
            .login(LoginUser {
                email: "ada@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.email, "ada@example.com");
        assert_eq!(response.roles, vec!["Candidate".to_string()]);
        assert!(response.expiration > Utc::now());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let service = test_service().await;
        service.register(register_dto()).await.unwrap();
        let err = service.register(register_dto()).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let service = test_service().await;
        service.register(register_dto()).await.unwrap();
        let err = service
            .login(LoginUser {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
