//! Application state.

use jobtrack_db::Db;

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::services::{
    AccountService, ApplicationService, CandidateService, CompanyService, JobService,
};

/// Shared application state. Services are stateless and cheap to clone;
/// they all share the one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub db: Db,
    pub accounts: AccountService,
    pub candidates: CandidateService,
    pub companies: CompanyService,
    pub jobs: JobService,
    pub applications: ApplicationService,
}

impl AppState {
    /// Create new application state: open the pool and apply the schema.
    pub async fn new(config: ApiConfig) -> ApiResult<Self> {
        let db = Db::connect(&config.database_url).await?;
        db.init_schema().await?;

        Ok(Self {
            accounts: AccountService::new(db.clone(), config.clone()),
            candidates: CandidateService::new(db.clone()),
            companies: CompanyService::new(db.clone()),
            jobs: JobService::new(db.clone()),
            applications: ApplicationService::new(db.clone()),
            config,
            db,
        })
    }
}
