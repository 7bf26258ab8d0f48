use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation::{validate_optional_text, validate_required_text};

/// Position of a member in the department (professor, researcher, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Status {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Status {
    pub const TABLE: &'static str = "status";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "created_by",
        "updated_by",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInput {
    pub name: String,
    pub description: String,
}

impl StatusInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text("name", &self.name)?;
        validate_optional_text("description", &self.description)
    }
}
