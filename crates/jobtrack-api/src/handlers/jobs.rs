//! Job post handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use jobtrack_models::{ApplicationDto, CreateJobPost, JobFilter, JobPostDto};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::policy::{self, Endpoint};
use crate::state::AppState;

/// POST /api/companies/{id}/jobs
///
/// Role-gated to Company/Admin; the caller's association with the target
/// company is not checked (see the policy module).
pub async fn create_job_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(company_id): Path<i64>,
    Json(dto): Json<CreateJobPost>,
) -> ApiResult<(StatusCode, Json<JobPostDto>)> {
    policy::authorize(&user, Endpoint::CreateJobPost)?;
    dto.validate().map_err(ApiError::from_validation)?;
    let job = state.jobs.create_job_post(company_id, dto).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs — public filtered listing.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> ApiResult<Json<Vec<JobPostDto>>> {
    let jobs = state.jobs.list_jobs(filter).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<JobPostDto>> {
    let job = state
        .jobs
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("JobPost id={id}")))?;
    Ok(Json(job))
}

/// GET /api/jobs/{id}/applications
///
/// A job id with no applications (including an id that does not exist)
/// yields an empty list rather than a 404.
pub async fn list_job_applications(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<ApplicationDto>>> {
    policy::authorize(&user, Endpoint::ListJobApplications)?;
    let applications = state.applications.list_for_job(id).await?;
    Ok(Json(applications))
}
