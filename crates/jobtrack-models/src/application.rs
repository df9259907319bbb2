//! Job application entity and transfer objects.
//!
//! An application is created once per (candidate, job post) pair and is
//! immutable afterwards; there is no withdraw or status transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

/// Job application row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: i64,
    pub candidate_id: i64,
    pub job_post_id: i64,
    pub resume_url: String,
    pub applied_at: DateTime<Utc>,
}

/// Application joined with the candidate and job post it references,
/// as read for response enrichment.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationDetails {
    #[sqlx(flatten)]
    pub application: JobApplication,
    pub candidate_name: String,
    pub job_title: String,
    pub company_name: String,
}

/// Application shape returned across the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i64,
    pub candidate_id: i64,
    pub candidate_name: String,
    pub job_post_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub resume_url: String,
    pub applied_at: DateTime<Utc>,
}

impl From<ApplicationDetails> for ApplicationDto {
    fn from(details: ApplicationDetails) -> Self {
        Self {
            id: details.application.id,
            candidate_id: details.application.candidate_id,
            candidate_name: details.candidate_name,
            job_post_id: details.application.job_post_id,
            job_title: details.job_title,
            company_name: details.company_name,
            resume_url: details.application.resume_url,
            applied_at: details.application.applied_at,
        }
    }
}

/// Request body for submitting an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    pub job_post_id: i64,
    pub resume_url: String,
}

impl Validate for CreateApplication {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.job_post_id < 1 {
            let mut err = ValidationError::new("range");
            err.message = Some("must be greater than 0".into());
            errors.add("job_post_id", err);
        }

        if self.resume_url.is_empty() || Url::parse(&self.resume_url).is_err() {
            let mut err = ValidationError::new("url");
            err.message = Some("must be an absolute URL".into());
            errors.add("resume_url", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
