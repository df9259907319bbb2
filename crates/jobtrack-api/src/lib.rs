//! Axum HTTP API server.
//!
//! This crate provides:
//! - REST API for companies, job posts, candidates, and applications
//! - JWT bearer-token auth with role-based authorization
//! - Request logging, request-id propagation, and security headers

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::Seeder;
pub use state::AppState;
