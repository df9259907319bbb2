//! Roles carried as claims in access tokens.

use serde::{Deserialize, Serialize};

/// A role granted to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Job seeker with a candidate profile.
    Candidate,
    /// Company account posting jobs.
    Company,
    /// Full access to all data.
    Admin,
}

impl Role {
    /// All roles, in the order they are seeded.
    pub const ALL: [Role; 3] = [Role::Candidate, Role::Company, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "Candidate",
            Role::Company => "Company",
            Role::Admin => "Admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Candidate" => Some(Role::Candidate),
            "Company" => Some(Role::Company),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
