//! Business logic services.

pub mod account;
pub mod application;
pub mod candidate;
pub mod company;
pub mod job;
pub mod seed;

pub use account::AccountService;
pub use application::ApplicationService;
pub use candidate::CandidateService;
pub use company::CompanyService;
pub use job::JobService;
pub use seed::Seeder;
