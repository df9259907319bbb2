//! Shared data models for the JobTrack backend.
//!
//! This crate provides Serde-serializable types for:
//! - Domain entities (companies, job posts, candidates, applications)
//! - Transfer objects returned across the HTTP boundary
//! - Request bodies with field-level validation rules
//! - Roles carried in token claims

pub mod application;
pub mod candidate;
pub mod company;
pub mod job_post;
pub mod role;
pub mod user;

// Re-export common types
pub use application::{ApplicationDetails, ApplicationDto, CreateApplication, JobApplication};
pub use candidate::{Candidate, CandidateDto, CreateCandidate};
pub use company::{Company, CompanyDto, CreateCompany};
pub use job_post::{CreateJobPost, JobFilter, JobPost, JobPostDto, JobPostWithCompany};
pub use role::Role;
pub use user::UserAccount;
