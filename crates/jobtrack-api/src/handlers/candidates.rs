//! Candidate profile handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use jobtrack_models::{CandidateDto, CreateCandidate};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::policy::{self, Endpoint};
use crate::state::AppState;

/// POST /api/candidates — create the caller's profile.
pub async fn create_candidate(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<CreateCandidate>,
) -> ApiResult<(StatusCode, Json<CandidateDto>)> {
    dto.validate().map_err(ApiError::from_validation)?;
    let candidate = state.candidates.create_profile(&user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /api/candidates/me — the caller's own profile.
pub async fn get_my_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<CandidateDto>> {
    let candidate = state
        .candidates
        .get_by_identity_user(&user.user_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "No candidate profile found for user {}.",
                user.user_id
            ))
        })?;
    Ok(Json(candidate))
}

/// GET /api/candidates/{id} — admin lookup by profile id.
pub async fn get_candidate_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<CandidateDto>> {
    policy::authorize(&user, Endpoint::GetCandidateById)?;
    let candidate = state
        .candidates
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Candidate id={id}")))?;
    Ok(Json(candidate))
}
