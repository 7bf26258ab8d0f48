use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text, validate_scope};

/// External institution collaborating with the department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub web: String,
    pub logo: String,
    pub same_department: bool,
    pub scope: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Partner {
    pub const TABLE: &'static str = "partner";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "web",
        "logo",
        "same_department",
        "scope",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub web: String,
    pub same_department: bool,
    pub scope: String,
}

impl PartnerInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)?;
        validate_optional_text("web", &self.web)?;
        validate_scope("scope", &self.scope)
    }
}
