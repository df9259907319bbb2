//! Company service.

use tracing::info;

use jobtrack_db::{CompanyRepository, Db};
use jobtrack_models::{CompanyDto, CreateCompany};

use crate::error::ApiResult;

/// Service for company creation and lookup. No invariants beyond field
/// validation, which happens at the boundary.
#[derive(Clone)]
pub struct CompanyService {
    companies: CompanyRepository,
}

impl CompanyService {
    pub fn new(db: Db) -> Self {
        Self {
            companies: CompanyRepository::new(db),
        }
    }

    pub async fn create(&self, dto: CreateCompany) -> ApiResult<CompanyDto> {
        let id = self.companies.insert(&dto.name).await?;
        info!(company_id = id, "company created");
        Ok(CompanyDto { id, name: dto.name })
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<CompanyDto>> {
        Ok(self.companies.get_by_id(id).await?.map(Into::into))
    }

    pub async fn get_all(&self) -> ApiResult<Vec<CompanyDto>> {
        let companies = self.companies.get_all().await?;
        Ok(companies.into_iter().map(Into::into).collect())
    }
}
