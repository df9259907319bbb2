//! Company entity and transfer objects.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Company row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Company shape returned across the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
        }
    }
}

/// Request body for creating a company.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn company_name_length_is_enforced() {
        let ok = CreateCompany {
            name: "Acme".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = CreateCompany {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = CreateCompany {
            name: "x".repeat(101),
        };
        assert!(too_long.validate().is_err());
    }
}
