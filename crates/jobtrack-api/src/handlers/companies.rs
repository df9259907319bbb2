//! Company handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use jobtrack_models::{CompanyDto, CreateCompany};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    Json(dto): Json<CreateCompany>,
) -> ApiResult<(StatusCode, Json<CompanyDto>)> {
    dto.validate().map_err(ApiError::from_validation)?;
    let company = state.companies.create(dto).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CompanyDto>> {
    let company = state
        .companies
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Company id={id}")))?;
    Ok(Json(company))
}

/// GET /api/companies
pub async fn list_companies(State(state): State<AppState>) -> ApiResult<Json<Vec<CompanyDto>>> {
    let companies = state.companies.get_all().await?;
    Ok(Json(companies))
}
