//! Registration and login handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::services::account::{AuthResponse, LoginUser, RegisterUser};
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUser>,
) -> ApiResult<Json<MessageResponse>> {
    dto.validate().map_err(ApiError::from_validation)?;
    state.accounts.register(dto).await?;
    Ok(Json(MessageResponse {
        message: "User registered successfully.".to_string(),
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginUser>,
) -> ApiResult<Json<AuthResponse>> {
    let response = state.accounts.login(dto).await?;
    Ok(Json(response))
}
