//! SQLite data access for the JobTrack backend.
//!
//! This crate provides:
//! - A pooled [`Db`] handle with embedded, idempotent schema bootstrap
//! - Typed repositories per entity (companies, job posts, candidates,
//!   applications, user accounts)
//! - Storage errors that surface unique-constraint violations as a
//!   dedicated variant, so the API layer can translate them to conflicts

pub mod application_repo;
pub mod candidate_repo;
pub mod company_repo;
pub mod db;
pub mod error;
pub mod job_post_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepository;
pub use candidate_repo::CandidateRepository;
pub use company_repo::CompanyRepository;
pub use db::Db;
pub use error::{DbError, DbResult};
pub use job_post_repo::JobPostRepository;
pub use user_repo::UserRepository;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jobtrack_models::JobFilter;

    async fn test_db() -> Db {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let db = test_db().await;
        db.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_candidate_profile_hits_unique_constraint() {
        let db = test_db().await;
        let candidates = CandidateRepository::new(db);

        candidates
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let err = candidates
            .insert("user-1", "Ada Again", "ada2@example.com")
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn duplicate_application_hits_unique_constraint() {
        let db = test_db().await;
        let companies = CompanyRepository::new(db.clone());
        let jobs = JobPostRepository::new(db.clone());
        let candidates = CandidateRepository::new(db.clone());
        let applications = ApplicationRepository::new(db);

        let company_id = companies.insert("Acme").await.unwrap();
        let job_id = jobs
            .insert(company_id, "Backend Engineer", "Rust services", Utc::now())
            .await
            .unwrap();
        let candidate_id = candidates
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();

        applications
            .insert(candidate_id, job_id, "https://cdn.example.com/r.pdf", Utc::now())
            .await
            .unwrap();
        assert!(applications.has_applied(candidate_id, job_id).await.unwrap());

        let err = applications
            .insert(candidate_id, job_id, "https://cdn.example.com/r2.pdf", Utc::now())
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn job_filter_is_conjunctive_and_ordered() {
        let db = test_db().await;
        let companies = CompanyRepository::new(db.clone());
        let jobs = JobPostRepository::new(db);

        let acme = companies.insert("Acme").await.unwrap();
        let globex = companies.insert("Globex").await.unwrap();

        let feb = "2025-02-10T12:00:00Z".parse().unwrap();
        let mar = "2025-03-05T09:00:00Z".parse().unwrap();
        jobs.insert(acme, "Frontend Developer (React)", "Build UIs", feb)
            .await
            .unwrap();
        jobs.insert(acme, "Solar Panel Technician", "Install panels", mar)
            .await
            .unwrap();
        jobs.insert(globex, "Senior Developer", "Ship backend code", mar)
            .await
            .unwrap();

        // Keyword matches title or description, case-insensitively.
        let by_keyword = jobs
            .list_filtered(&JobFilter {
                keyword: Some("DEVELOPER".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_keyword.len(), 2);
        // Newest first.
        assert_eq!(by_keyword[0].job.title, "Senior Developer");

        // Combined filters are AND.
        let combined = jobs
            .list_filtered(&JobFilter {
                keyword: Some("developer".to_string()),
                company_id: Some(acme),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].job.title, "Frontend Developer (React)");

        // Date window is [start, end).
        let windowed = jobs
            .list_filtered(&JobFilter {
                start_date: Some("2025-02-01T00:00:00Z".parse().unwrap()),
                end_date: Some("2025-03-01T00:00:00Z".parse().unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(windowed.len(), 1);
        assert_eq!(windowed[0].job.title, "Frontend Developer (React)");
    }

    #[tokio::test]
    async fn application_listings_carry_joined_context() {
        let db = test_db().await;
        let companies = CompanyRepository::new(db.clone());
        let jobs = JobPostRepository::new(db.clone());
        let candidates = CandidateRepository::new(db.clone());
        let applications = ApplicationRepository::new(db);

        let company_id = companies.insert("Acme").await.unwrap();
        let job_id = jobs
            .insert(company_id, "Backend Engineer", "Rust services", Utc::now())
            .await
            .unwrap();
        let candidate_id = candidates
            .insert("user-1", "Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let app_id = applications
            .insert(candidate_id, job_id, "https://cdn.example.com/r.pdf", Utc::now())
            .await
            .unwrap();

        let details = applications.get_details(app_id).await.unwrap().unwrap();
        assert_eq!(details.candidate_name, "Ada Lovelace");
        assert_eq!(details.job_title, "Backend Engineer");
        assert_eq!(details.company_name, "Acme");

        let for_job = applications.list_by_job(job_id).await.unwrap();
        assert_eq!(for_job.len(), 1);
        let for_candidate = applications.list_by_candidate(candidate_id).await.unwrap();
        assert_eq!(for_candidate.len(), 1);
    }
}
