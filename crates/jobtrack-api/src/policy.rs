//! Role-based authorization policy.
//!
//! All role requirements live in one table here instead of being spread
//! across handlers. The single case where role membership is not enough
//! (viewing one application) gets an explicit ownership predicate.
//!
//! Known limitation carried over from the system's design: job-post
//! creation and per-job application listing only check role membership
//! in {Company, Admin}; the caller's association with the *target*
//! company is never verified.

use jobtrack_models::Role;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};

/// Protected operations with a role requirement beyond "authenticated".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// GET /api/candidates/{id}
    GetCandidateById,
    /// POST /api/companies/{id}/jobs
    CreateJobPost,
    /// GET /api/jobs/{id}/applications
    ListJobApplications,
    /// POST /api/applications
    SubmitApplication,
    /// GET /api/applications/my
    ListOwnApplications,
}

impl Endpoint {
    /// Roles permitted to call this endpoint (any-of).
    pub fn required_roles(self) -> &'static [Role] {
        match self {
            Endpoint::GetCandidateById => &[Role::Admin],
            Endpoint::CreateJobPost => &[Role::Company, Role::Admin],
            Endpoint::ListJobApplications => &[Role::Company, Role::Admin],
            Endpoint::SubmitApplication => &[Role::Candidate],
            Endpoint::ListOwnApplications => &[Role::Candidate],
        }
    }
}

/// Reject with 403 unless the caller holds one of the endpoint's roles.
pub fn authorize(user: &AuthUser, endpoint: Endpoint) -> ApiResult<()> {
    if user.has_any_role(endpoint.required_roles()) {
        Ok(())
    } else {
        Err(ApiError::forbidden("Access denied."))
    }
}

/// Ownership check for viewing a single application, applied after the
/// existence check: admins see everything; a candidate sees only their
/// own submissions.
pub fn can_view_application(
    user: &AuthUser,
    application_candidate_id: i64,
    own_profile_id: Option<i64>,
) -> bool {
    if user.has_role(Role::Admin) {
        return true;
    }
    if user.has_role(Role::Candidate) {
        if let Some(profile_id) = own_profile_id {
            return profile_id == application_candidate_id;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(roles: &[Role]) -> AuthUser {
        AuthUser {
            user_id: "user-1".to_string(),
            email: "u@example.com".to_string(),
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn role_table_gates_endpoints() {
        let candidate = user_with(&[Role::Candidate]);
        let company = user_with(&[Role::Company]);
        let admin = user_with(&[Role::Admin]);

        assert!(authorize(&candidate, Endpoint::SubmitApplication).is_ok());
        assert!(authorize(&company, Endpoint::SubmitApplication).is_err());

        assert!(authorize(&company, Endpoint::CreateJobPost).is_ok());
        assert!(authorize(&admin, Endpoint::CreateJobPost).is_ok());
        assert!(authorize(&candidate, Endpoint::CreateJobPost).is_err());

        assert!(authorize(&admin, Endpoint::GetCandidateById).is_ok());
        assert!(authorize(&candidate, Endpoint::GetCandidateById).is_err());
    }

    #[test]
    fn admins_view_any_application() {
        let admin = user_with(&[Role::Admin]);
        assert!(can_view_application(&admin, 42, None));
    }

    #[test]
    fn candidates_view_only_their_own_application() {
        let candidate = user_with(&[Role::Candidate]);
        assert!(can_view_application(&candidate, 7, Some(7)));
        assert!(!can_view_application(&candidate, 8, Some(7)));
        assert!(!can_view_application(&candidate, 7, None));
    }

    #[test]
    fn company_role_alone_cannot_view_an_application() {
        let company = user_with(&[Role::Company]);
        assert!(!can_view_application(&company, 7, None));
    }
}
