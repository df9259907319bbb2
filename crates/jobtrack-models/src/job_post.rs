//! Job post entity, transfer objects, and listing filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Job post row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPost {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub company_id: i64,
}

/// Job post joined with its company name, as read for listings.
#[derive(Debug, Clone, FromRow)]
pub struct JobPostWithCompany {
    #[sqlx(flatten)]
    pub job: JobPost,
    pub company_name: String,
}

/// Job post shape returned across the HTTP boundary.
///
/// Carries the denormalized company name so clients never need a
/// second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub company_id: i64,
    pub company_name: String,
}

impl From<JobPostWithCompany> for JobPostDto {
    fn from(row: JobPostWithCompany) -> Self {
        Self {
            id: row.job.id,
            title: row.job.title,
            description: row.job.description,
            posted_at: row.job.posted_at,
            company_id: row.job.company_id,
            company_name: row.company_name,
        }
    }
}

/// Request body for posting a job under a company.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPost {
    #[validate(length(min = 1, max = 150, message = "must be between 1 and 150 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
}

/// Optional, conjunctive filters for the public job listing.
///
/// `start_date` is an inclusive lower bound and `end_date` an exclusive
/// upper bound on `posted_at`. Dates accept RFC 3339 timestamps or bare
/// `YYYY-MM-DD` (interpreted as midnight UTC).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub keyword: Option<String>,
    pub company_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flexible_date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_flexible_date")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_filter_date(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    Err(format!("invalid date '{s}', expected RFC 3339 or YYYY-MM-DD"))
}

fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse_filter_date(s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn title_and_description_are_required() {
        let ok = CreateJobPost {
            title: "Backend Engineer".to_string(),
            description: "Rust services".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_description = CreateJobPost {
            title: "Backend Engineer".to_string(),
            description: String::new(),
        };
        assert!(no_description.validate().is_err());

        let long_title = CreateJobPost {
            title: "t".repeat(151),
            description: "ok".to_string(),
        };
        assert!(long_title.validate().is_err());
    }

    #[test]
    fn filter_deserializes_from_camel_case_query_shape() {
        let filter: JobFilter = serde_json::from_str(
            r#"{"keyword":"rust","companyId":3,"startDate":"2025-02-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(filter.keyword.as_deref(), Some("rust"));
        assert_eq!(filter.company_id, Some(3));
        assert!(filter.start_date.is_some());
        assert!(filter.end_date.is_none());
    }

    #[test]
    fn filter_dates_accept_bare_days() {
        let dt = parse_filter_date("2025-02-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-02-01T00:00:00+00:00");
        assert!(parse_filter_date("02/01/2025").is_err());

        let filter: JobFilter =
            serde_json::from_str(r#"{"startDate":"2025-02-01","endDate":"2025-03-01"}"#).unwrap();
        assert!(filter.start_date.unwrap() < filter.end_date.unwrap());
    }
}
