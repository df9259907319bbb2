//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::applications::{get_application, list_my_applications, submit_application};
use crate::handlers::auth::{login, register};
use crate::handlers::candidates::{create_candidate, get_candidate_by_id, get_my_profile};
use crate::handlers::companies::{create_company, get_company, list_companies};
use crate::handlers::jobs::{create_job_post, get_job, list_job_applications, list_jobs};
use crate::handlers::{health, ready};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let candidate_routes = Router::new()
        .route("/candidates", post(create_candidate))
        .route("/candidates/me", get(get_my_profile))
        .route("/candidates/:id", get(get_candidate_by_id));

    let company_routes = Router::new()
        .route("/companies", post(create_company).get(list_companies))
        .route("/companies/:id", get(get_company))
        .route("/companies/:id/jobs", post(create_job_post));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/:id", get(get_job))
        .route("/jobs/:id/applications", get(list_job_applications));

    let application_routes = Router::new()
        .route("/applications", post(submit_application))
        .route("/applications/my", get(list_my_applications))
        .route("/applications/:id", get(get_application));

    let api_routes = Router::new()
        .merge(auth_routes)
        .merge(candidate_routes)
        .merge(company_routes)
        .merge(job_routes)
        .merge(application_routes);

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
