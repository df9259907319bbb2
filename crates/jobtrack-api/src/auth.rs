//! Bearer-token authentication: HS256 token issuance and validation.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobtrack_models::Role;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Claims carried in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity-user id (subject).
    pub sub: String,
    pub email: String,
    /// Role names granted to the user.
    pub roles: Vec<String>,
    /// Token id.
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed token for a user; returns the token and its expiry.
pub fn issue_token(
    config: &ApiConfig,
    user_id: &str,
    email: &str,
    roles: &[String],
) -> ApiResult<(String, DateTime<Utc>)> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.jwt_duration_minutes);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        roles: roles.to_vec(),
        jti: Uuid::new_v4().to_string(),
        iss: config.jwt_issuer.clone(),
        aud: config.jwt_audience.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::internal(format!("Failed to sign token: {e}")))?;

    Ok((token, expires_at))
}

/// Validate a token's signature, issuer, audience, and lifetime.
pub fn verify_token(config: &ApiConfig, token: &str) -> ApiResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_audience(&[&config.jwt_audience]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| ApiError::unauthorized(format!("Token validation failed: {e}")))?;

    Ok(token_data.claims)
}

/// Authenticated user extracted from the request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity-user id, distinct from any candidate profile id.
    pub user_id: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl AuthUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        // Unknown role strings are dropped rather than rejected.
        let roles = claims
            .roles
            .iter()
            .filter_map(|r| Role::from_str(r))
            .collect();
        Self {
            user_id: claims.sub,
            email: claims.email,
            roles,
        }
    }
}

/// Axum extractor for authenticated user.
#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        let claims = verify_token(&state.config, token)?;

        Ok(AuthUser::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig {
            jwt_secret: "test-secret".to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn issued_tokens_verify_and_carry_roles() {
        let config = test_config();
        let (token, expires_at) = issue_token(
            &config,
            "user-1",
            "ada@example.com",
            &["Candidate".to_string(), "Admin".to_string()],
        )
        .unwrap();
        assert!(expires_at > Utc::now());

        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "user-1");

        let user = AuthUser::from(claims);
        assert!(user.has_role(Role::Candidate));
        assert!(user.has_role(Role::Admin));
        assert!(!user.has_role(Role::Company));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let config = test_config();
        let other = ApiConfig {
            jwt_secret: "other-secret".to_string(),
            ..ApiConfig::default()
        };
        let (token, _) = issue_token(&other, "user-1", "a@b.c", &[]).unwrap();
        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn unknown_role_claims_are_ignored() {
        let config = test_config();
        let (token, _) = issue_token(
            &config,
            "user-1",
            "a@b.c",
            &["Candidate".to_string(), "Wizard".to_string()],
        )
        .unwrap();
        let user = AuthUser::from(verify_token(&config, &token).unwrap());
        assert_eq!(user.roles, vec![Role::Candidate]);
    }
}
