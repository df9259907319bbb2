//! Application handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use jobtrack_models::{ApplicationDto, CreateApplication};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::policy::{self, Endpoint};
use crate::state::AppState;

/// POST /api/applications
pub async fn submit_application(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<CreateApplication>,
) -> ApiResult<(StatusCode, Json<ApplicationDto>)> {
    policy::authorize(&user, Endpoint::SubmitApplication)?;
    dto.validate().map_err(ApiError::from_validation)?;
    let application = state.applications.submit(&user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/my
pub async fn list_my_applications(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<ApplicationDto>>> {
    policy::authorize(&user, Endpoint::ListOwnApplications)?;
    let applications = state.applications.list_for_candidate(&user.user_id).await?;
    Ok(Json(applications))
}

/// GET /api/applications/{id}
///
/// Existence is checked before ownership, so an id that does not exist
/// is a 404 for every caller; a foreign application is a 403.
pub async fn get_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApplicationDto>> {
    let application = state
        .applications
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("JobApplication id={id}")))?;

    let own_profile_id = state
        .candidates
        .get_by_identity_user(&user.user_id)
        .await?
        .map(|c| c.id);

    if !policy::can_view_application(&user, application.candidate_id, own_profile_id) {
        return Err(ApiError::forbidden("Access denied."));
    }

    Ok(Json(application))
}
